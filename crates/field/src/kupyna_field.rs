// Copyright 2024 Ulvetanna Inc.

use std::{
	fmt::{Debug, Display, Formatter},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use bytemuck::{Pod, Zeroable};
use rand::RngCore;

use crate::{
	arithmetic::MUL_TABLE,
	arithmetic_traits::{InvertOrZero, Square},
};

/// An element of GF(2^8) modulo `x^8 + x^4 + x^3 + x^2 + 1`.
///
/// Addition is XOR, multiplication is a lookup into [`MUL_TABLE`].
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable, Pod)]
#[repr(transparent)]
pub struct KupynaField8b(u8);

impl KupynaField8b {
	/// The additive identity.
	pub const ZERO: Self = Self(0);

	/// The multiplicative identity.
	pub const ONE: Self = Self(1);

	/// The multiplicative group generator `x`.
	pub const GENERATOR: Self = Self(2);

	pub const fn new(value: u8) -> Self {
		Self(value)
	}

	pub const fn val(self) -> u8 {
		self.0
	}

	pub fn is_zero(self) -> bool {
		self == Self::ZERO
	}

	/// Returns an element chosen uniformly at random using a user-provided RNG.
	pub fn random(mut rng: impl RngCore) -> Self {
		let mut byte = [0u8; 1];
		rng.fill_bytes(&mut byte);
		Self(byte[0])
	}

	/// Computes the multiplicative inverse of this element,
	/// failing if the element is zero.
	pub fn invert(self) -> Option<Self> {
		let inv = self.invert_or_zero();
		(!inv.is_zero()).then_some(inv)
	}

	/// Exponentiates `self` by `exp` with square-and-multiply.
	pub fn pow(self, exp: u64) -> Self {
		let mut res = Self::ONE;
		for i in (0..64).rev() {
			res = res.square();
			if (exp >> i) & 1 == 1 {
				res *= self;
			}
		}
		res
	}
}

impl Debug for KupynaField8b {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "KupynaField8b(0x{:02x})", self.0)
	}
}

impl Display for KupynaField8b {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "0x{:02x}", self.0)
	}
}

impl From<u8> for KupynaField8b {
	fn from(value: u8) -> Self {
		Self(value)
	}
}

impl From<KupynaField8b> for u8 {
	fn from(value: KupynaField8b) -> Self {
		value.0
	}
}

impl Neg for KupynaField8b {
	type Output = Self;

	fn neg(self) -> Self::Output {
		self
	}
}

impl Add<Self> for KupynaField8b {
	type Output = Self;

	#[allow(clippy::suspicious_arithmetic_impl)]
	fn add(self, rhs: Self) -> Self::Output {
		Self(self.0 ^ rhs.0)
	}
}

impl Add<&Self> for KupynaField8b {
	type Output = Self;

	fn add(self, rhs: &Self) -> Self::Output {
		self + *rhs
	}
}

impl Sub<Self> for KupynaField8b {
	type Output = Self;

	#[allow(clippy::suspicious_arithmetic_impl)]
	fn sub(self, rhs: Self) -> Self::Output {
		Self(self.0 ^ rhs.0)
	}
}

impl Mul<Self> for KupynaField8b {
	type Output = Self;

	#[inline]
	fn mul(self, rhs: Self) -> Self::Output {
		Self(MUL_TABLE[self.0 as usize][rhs.0 as usize])
	}
}

impl Mul<&Self> for KupynaField8b {
	type Output = Self;

	fn mul(self, rhs: &Self) -> Self::Output {
		self * *rhs
	}
}

impl AddAssign<Self> for KupynaField8b {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl SubAssign<Self> for KupynaField8b {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl MulAssign<Self> for KupynaField8b {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl Sum<Self> for KupynaField8b {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl<'a> Sum<&'a Self> for KupynaField8b {
	fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl Product<Self> for KupynaField8b {
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

impl Square for KupynaField8b {
	fn square(self) -> Self {
		self * self
	}
}

impl InvertOrZero for KupynaField8b {
	fn invert_or_zero(self) -> Self {
		// The multiplicative group has order 255, so a^254 = a^-1.
		self.pow(254)
	}
}

/// Dot product of two equal-length field vectors.
pub fn inner_product(lhs: &[KupynaField8b], rhs: &[KupynaField8b]) -> KupynaField8b {
	debug_assert_eq!(lhs.len(), rhs.len());
	lhs.iter().zip(rhs).map(|(&a, &b)| a * b).sum()
}
