//! Number formatting utilities
//!
//! Uses `itoa` for integers and `ryu` for floats, avoiding heap allocations
//! while formatting.
//!
//! # Fixed-point rounding
//!
//! [`format_fixed`] rounds half away from zero, applied to the shortest
//! decimal representation that round-trips to the same `f64` (as produced by
//! `ryu`). That representation is unique for every `f64`, so the output is the
//! same on every platform, and values such as `1.005` round the way they read
//! (`"1.01"`), not the way their binary approximation falls.
//!
//! ```rust
//! use pseudobin_codec::numfmt::format_fixed;
//!
//! assert_eq!(format_fixed(12.940000000000001, 2), "12.94");
//! assert_eq!(format_fixed(2.5, 0), "3");
//! assert_eq!(format_fixed(-0.125, 2), "-0.13");
//! ```

/// Format an i64 using a stack buffer
#[inline]
pub fn i64_to_string(n: i64) -> String {
    let mut buffer = itoa::Buffer::new();
    buffer.format(n).to_owned()
}

/// Shortest round-trip representation of a finite f64
#[inline]
pub fn f64_shortest(n: f64) -> String {
    let mut buffer = ryu::Buffer::new();
    buffer.format(n).to_owned()
}

/// Decimal digits of a finite, non-negative number as `0.DDDD × 10^point`
struct Decimal {
    digits: Vec<u8>,
    point: i32,
}

impl Decimal {
    /// Parse `ryu` output (`"12.5"`, `"1e16"`, `"1.5e-7"`), sign already stripped
    fn parse(repr: &str) -> Self {
        let (mantissa, exponent) = match repr.split_once(['e', 'E']) {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (repr, 0),
        };
        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let mut digits: Vec<u8> = int_part
            .bytes()
            .chain(frac_part.bytes())
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        let mut point = int_part.len() as i32 + exponent;

        let leading = digits.iter().take_while(|&&d| d == 0).count();
        digits.drain(..leading);
        point -= leading as i32;

        Self { digits, point }
    }

    /// Keep `frac_digits` places after the decimal point, rounding half away from zero
    fn round(&mut self, frac_digits: u32) {
        let keep = self.point + frac_digits as i32;
        if self.digits.is_empty() || keep < 0 {
            self.digits.clear();
            return;
        }

        let keep = keep as usize;
        let round_up = self.digits.get(keep).is_some_and(|&d| d >= 5);
        self.digits.resize(keep, 0);

        if round_up {
            let mut carry = true;
            for digit in self.digits.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                self.digits.insert(0, 1);
                self.point += 1;
            }
        }
    }

    fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Render with exactly `frac_digits` fractional places
    fn render(&self, negative: bool, frac_digits: u32, out: &mut String) {
        let frac_digits = frac_digits as usize;
        if self.is_zero() {
            out.push('0');
            if frac_digits > 0 {
                out.push('.');
                out.extend(std::iter::repeat_n('0', frac_digits));
            }
            return;
        }

        if negative {
            out.push('-');
        }

        let to_char = |d: &u8| char::from(b'0' + d);
        let mut fraction: Vec<char> = Vec::with_capacity(frac_digits);
        if self.point > 0 {
            let split = (self.point as usize).min(self.digits.len());
            out.extend(self.digits[..split].iter().map(to_char));
            out.extend(std::iter::repeat_n('0', self.point as usize - split));
            fraction.extend(self.digits[split..].iter().map(to_char));
        } else {
            out.push('0');
            fraction.extend(std::iter::repeat_n('0', (-self.point) as usize));
            fraction.extend(self.digits.iter().map(to_char));
        }

        if frac_digits > 0 {
            fraction.resize(frac_digits, '0');
            out.push('.');
            out.extend(fraction);
        }
    }
}

/// Round a finite f64 to `frac_digits` places, half away from zero
///
/// Negative results that round to zero are printed without a sign.
pub fn format_fixed(value: f64, frac_digits: u32) -> String {
    let mut buffer = ryu::Buffer::new();
    let repr = buffer.format_finite(value);
    let (negative, magnitude) = match repr.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, repr),
    };

    let mut decimal = Decimal::parse(magnitude);
    decimal.round(frac_digits);

    let mut out = String::with_capacity(24 + frac_digits as usize);
    decimal.render(negative, frac_digits, &mut out);
    out
}
