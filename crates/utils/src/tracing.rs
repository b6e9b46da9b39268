// Copyright 2023 Ulvetanna Inc.

use crate::env::boolean_env_flag_set;

/// Environment flag which enables span-close events, useful for timing the
/// permutation and compression spans.
pub const LOG_SPANS_FLAG: &str = "KUPYNA_LOG_SPANS";

/// Installs the global subscriber. Filtering follows `RUST_LOG` and defaults to `info`.
///
/// Calling it more than once is harmless, later calls are ignored.
pub fn init_tracing() {
	use tracing_subscriber::{
		fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
	};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let span_events = if boolean_env_flag_set(LOG_SPANS_FLAG) {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_span_events(span_events))
		.try_init();
}
