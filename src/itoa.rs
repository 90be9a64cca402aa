// SPDX-License-Identifier: MIT OR Apache-2.0

//! Zero-padded decimal rendering into a reusable byte buffer.

/// Widest decimal representation of a `u64`.
const MAX_DIGITS: usize = 20;

/// Appends the decimal digits of `value` to `buf`, left-padded with `'0'` to at
/// least `width` characters.
///
/// A `width` of zero or less means no padding, except that zero always renders
/// as a single `"0"`. The buffer grows at most once per call.
///
/// ```
/// let mut buf = Vec::new();
/// linewise::render(&mut buf, 7, 2);
/// buf.push(b':');
/// linewise::render(&mut buf, 1234, -1);
/// assert_eq!(buf, b"07:1234");
/// ```
pub fn render(buf: &mut Vec<u8>, value: u64, width: i32) {
    if value == 0 && width <= 1 {
        buf.push(b'0');
        return;
    }

    let mut digits = [0u8; MAX_DIGITS];
    let mut start = MAX_DIGITS;
    let mut rest = value;
    while rest > 0 {
        start -= 1;
        digits[start] = b'0' + (rest % 10) as u8;
        rest /= 10;
    }
    let len = MAX_DIGITS - start;
    let padding = usize::try_from(width).unwrap_or(0).saturating_sub(len);

    buf.reserve(padding + len);
    buf.resize(buf.len() + padding, b'0');
    buf.extend_from_slice(&digits[start..]);
}

#[cfg(test)]
mod tests {
    use super::render;

    fn rendered(value: u64, width: i32) -> String {
        let mut buf = Vec::new();
        render(&mut buf, value, width);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn zero_special_cases() {
        assert_eq!(rendered(0, 0), "0");
        assert_eq!(rendered(0, 1), "0");
        assert_eq!(rendered(0, -1), "0");
        assert_eq!(rendered(0, 3), "000");
    }

    #[test]
    fn pads_to_width() {
        assert_eq!(rendered(5, 2), "05");
        assert_eq!(rendered(2023, 4), "2023");
        assert_eq!(rendered(42, 6), "000042");
        assert_eq!(rendered(999, 2), "999");
    }

    #[test]
    fn no_padding_for_non_positive_width() {
        assert_eq!(rendered(1234, 0), "1234");
        assert_eq!(rendered(1234, -1), "1234");
        assert_eq!(rendered(u64::MAX, -7), u64::MAX.to_string());
    }

    #[test]
    fn wide_padding_beyond_digit_buffer() {
        let out = rendered(7, 25);
        assert_eq!(out.len(), 25);
        assert!(out.ends_with("07"));
        assert!(out.bytes().take(24).all(|b| b == b'0'));
    }

    #[test]
    fn length_and_alignment_hold_across_widths() {
        for value in [0u64, 1, 9, 10, 99, 100, 65_535, 999_999, 1_000_000] {
            for width in 0..10 {
                let out = rendered(value, width);
                let digits = value.to_string();
                assert!(out.len() >= (width as usize).max(digits.len()));
                assert!(out.ends_with(&digits));
                let pad = &out[..out.len() - digits.len()];
                assert!(pad.bytes().all(|b| b == b'0'), "{out:?}");
            }
        }
    }

    #[test]
    fn appends_without_disturbing_existing_content() {
        let mut buf = b"line ".to_vec();
        render(&mut buf, 3, 2);
        assert_eq!(buf, b"line 03");
    }

    #[test]
    fn wide_padding_grows_the_buffer_once() {
        let mut buf = Vec::with_capacity(4);
        buf.extend_from_slice(b"ab");
        render(&mut buf, 7, 40);
        assert_eq!(buf.len(), 42);

        // one reserve of the whole field lands on the same capacity; growing
        // digit by digit would have doubled past it
        let mut once: Vec<u8> = Vec::with_capacity(4);
        once.extend_from_slice(b"ab");
        once.reserve(40);
        assert_eq!(buf.capacity(), once.capacity());
    }

    #[test]
    fn enough_capacity_is_not_reallocated() {
        let mut buf = Vec::with_capacity(64);
        let ptr = buf.as_ptr();
        render(&mut buf, 123_456, 30);
        assert_eq!(buf.capacity(), 64);
        assert_eq!(buf.as_ptr(), ptr);
    }
}
