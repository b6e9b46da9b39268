// Copyright 2024 Irreducible Inc.

use kupyna_field::{inner_product, KupynaField8b};

use crate::state::{State, MAX_COLUMNS, ROWS};

const fn mds_row(row: [u8; ROWS]) -> [KupynaField8b; ROWS] {
	let mut out = [KupynaField8b::ZERO; ROWS];
	let mut i = 0;
	while i < ROWS {
		out[i] = KupynaField8b::new(row[i]);
		i += 1;
	}
	out
}

/// The circulant MDS matrix of the column mixing step, generated by `(1, 1, 5, 1, 8, 6, 7, 4)`.
pub const MDS_MATRIX: [[KupynaField8b; ROWS]; ROWS] = [
	mds_row([0x01, 0x01, 0x05, 0x01, 0x08, 0x06, 0x07, 0x04]),
	mds_row([0x04, 0x01, 0x01, 0x05, 0x01, 0x08, 0x06, 0x07]),
	mds_row([0x07, 0x04, 0x01, 0x01, 0x05, 0x01, 0x08, 0x06]),
	mds_row([0x06, 0x07, 0x04, 0x01, 0x01, 0x05, 0x01, 0x08]),
	mds_row([0x08, 0x06, 0x07, 0x04, 0x01, 0x01, 0x05, 0x01]),
	mds_row([0x01, 0x08, 0x06, 0x07, 0x04, 0x01, 0x01, 0x05]),
	mds_row([0x05, 0x01, 0x08, 0x06, 0x07, 0x04, 0x01, 0x01]),
	mds_row([0x01, 0x05, 0x01, 0x08, 0x06, 0x07, 0x04, 0x01]),
];

/// Number of columns row `row` is rotated by.
///
/// Rows 0..=6 move by their index. The last row moves by 11 in the 16-column state and by 7 in
/// the 8-column state.
pub const fn row_shift(row: usize, n_columns: usize) -> usize {
	if row == ROWS - 1 && n_columns == MAX_COLUMNS {
		11
	} else {
		row
	}
}

/// Rotates each row across the columns: the byte in column `j` moves to column
/// `(j + row_shift(row)) % n_columns`.
///
/// # Panics
///
/// Panics if the state has more than [`MAX_COLUMNS`] columns.
pub fn shift_bytes(state: &mut State) {
	let n_columns = state.n_columns();
	assert!(
		n_columns <= MAX_COLUMNS,
		"state has {n_columns} columns, at most {MAX_COLUMNS} are supported"
	);
	let columns = state.columns_mut();
	let mut buf = [0u8; MAX_COLUMNS];
	for row in 1..ROWS {
		let row_buf = &mut buf[..n_columns];
		for (dst, column) in row_buf.iter_mut().zip(columns.iter()) {
			*dst = column[row];
		}
		row_buf.rotate_right(row_shift(row, n_columns) % n_columns);
		for (column, &src) in columns.iter_mut().zip(row_buf.iter()) {
			column[row] = src;
		}
	}
}

/// Multiplies every column by [`MDS_MATRIX`] over GF(2^8).
pub fn mix_columns(state: &mut State) {
	for column in state.columns_mut() {
		let input: [KupynaField8b; ROWS] = bytemuck::must_cast(*column);
		let output: [KupynaField8b; ROWS] =
			std::array::from_fn(|row| inner_product(&MDS_MATRIX[row], &input));
		*column = bytemuck::must_cast(output);
	}
}
