//! Numeric parsing with the same leniency browsers apply to attribute and
//! computed-style strings.
//!
//! - [`parse_number`]: the whole string must be numeric (`Number(s)`).
//! - [`parse_int_prefix`]: leading integer, rest ignored (`parseInt(s)`).
//! - [`parse_float_prefix`]: leading decimal, rest ignored (`parseFloat(s)`).
//!
//! Every parser returns `f64::NAN` on failure so callers can decide how to
//! degrade.

/// Whitespace stripped before parsing: Unicode whitespace plus the BOM.
fn is_space(c: char) -> bool {
	c.is_whitespace() || c == '\u{feff}'
}

/// Length in bytes of the longest decimal literal at the start of `s`
/// (`[+-]digits[.digits][e[+-]digits]`), or 0 if there is none.
fn decimal_prefix_len(s: &str) -> usize {
	let bytes = s.as_bytes();
	let mut i = 0;
	if matches!(bytes.first(), Some(b'+' | b'-')) {
		i += 1;
	}
	let int_start = i;
	while i < bytes.len() && bytes[i].is_ascii_digit() {
		i += 1;
	}
	let mut digits = i - int_start;
	if i < bytes.len() && bytes[i] == b'.' {
		let frac_start = i + 1;
		let mut j = frac_start;
		while j < bytes.len() && bytes[j].is_ascii_digit() {
			j += 1;
		}
		if digits > 0 || j > frac_start {
			digits += j - frac_start;
			i = j;
		}
	}
	if digits == 0 {
		return 0;
	}
	if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
		let mut j = i + 1;
		if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
			j += 1;
		}
		let exp_start = j;
		while j < bytes.len() && bytes[j].is_ascii_digit() {
			j += 1;
		}
		if j > exp_start {
			i = j;
		}
	}
	i
}

/// Parses a signed `Infinity` literal prefix, returning its value and length.
fn infinity_prefix(s: &str) -> Option<(f64, usize)> {
	let (sign, rest, offset) = match s.as_bytes().first() {
		Some(b'-') => (-1.0, &s[1..], 1),
		Some(b'+') => (1.0, &s[1..], 1),
		_ => (1.0, s, 0),
	};
	rest.starts_with("Infinity")
		.then_some((sign * f64::INFINITY, offset + "Infinity".len()))
}

/// Converts a whole string to a number.
///
/// Empty and all-whitespace strings are `0`. Hex (`0x`), octal (`0o`) and
/// binary (`0b`) literals are accepted without a sign. Anything else must be
/// a complete decimal literal or `Infinity`.
pub fn parse_number(raw: &str) -> f64 {
	let s = raw.trim_matches(is_space);
	if s.is_empty() {
		return 0.0;
	}
	if let Some((value, len)) = infinity_prefix(s) {
		return if len == s.len() { value } else { f64::NAN };
	}
	let radix = match s.get(..2) {
		Some("0x" | "0X") => Some(16),
		Some("0o" | "0O") => Some(8),
		Some("0b" | "0B") => Some(2),
		_ => None,
	};
	if let Some(radix) = radix {
		return u128::from_str_radix(&s[2..], radix).map_or(f64::NAN, |v| v as f64);
	}
	let len = decimal_prefix_len(s);
	if len != s.len() {
		return f64::NAN;
	}
	s.parse().unwrap_or(f64::NAN)
}

/// Parses the leading base-10 (or `0x`-prefixed hex) integer of `raw`.
pub fn parse_int_prefix(raw: &str) -> f64 {
	let s = raw.trim_start_matches(is_space);
	let (sign, s) = match s.as_bytes().first() {
		Some(b'-') => (-1.0, &s[1..]),
		Some(b'+') => (1.0, &s[1..]),
		_ => (1.0, s),
	};
	let (radix, digits) = match s.get(..2) {
		Some("0x" | "0X") => (16, &s[2..]),
		_ => (10, s),
	};
	let end = digits
		.char_indices()
		.find(|(_, c)| !c.is_digit(radix))
		.map_or(digits.len(), |(i, _)| i);
	if end == 0 {
		return f64::NAN;
	}
	u128::from_str_radix(&digits[..end], radix).map_or(f64::NAN, |v| sign * v as f64)
}

/// Parses the leading decimal literal of `raw`, ignoring trailing text such as
/// CSS units (`"0.3s"` is `0.3`).
pub fn parse_float_prefix(raw: &str) -> f64 {
	let s = raw.trim_start_matches(is_space);
	if let Some((value, _)) = infinity_prefix(s) {
		return value;
	}
	match decimal_prefix_len(s) {
		0 => f64::NAN,
		len => s[..len].parse().unwrap_or(f64::NAN),
	}
}

/// Formats a number the way it appears in CSS expressions and attribute
/// values: integral values without a fraction, `-0` as `0`, and `NaN` /
/// `Infinity` spelled out.
pub fn format_number(value: f64) -> String {
	if value.is_nan() {
		return "NaN".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
	}
	if value == 0.0 {
		return "0".to_owned();
	}
	if value.fract() == 0.0 && value.abs() < 1e21 {
		return format!("{value:.0}");
	}
	value.to_string()
}
