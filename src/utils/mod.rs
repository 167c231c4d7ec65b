pub(crate) mod date;
pub(crate) mod debug;

pub(crate) use date::{parse_date, parse_datetime, parse_time};
pub(crate) use debug::{debug_enabled, set_debug};
