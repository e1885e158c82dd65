/// View-side formatting helpers for admin listings.

/// Resolves a stored image path to an absolute URL. Links that are already
/// absolute pass through untouched.
pub fn image_url(url: &str, base: &str) -> String {
    if url.starts_with("http") {
        return url.to_string();
    }

    format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
}

/// Renders an image tag for a stored path, defaulting to the 50x50 grid size.
pub fn image_tag(url: &str, base: &str, width: Option<u32>, height: Option<u32>) -> String {
    let url = image_url(url, base);
    let width = width.unwrap_or(50);
    let height = height.unwrap_or(50);

    format!("<img width='{width}' height='{height}' src='{url}' />")
}

/// Forces a string to an exact length: longer inputs keep their trailing
/// `length` characters, shorter inputs are left-padded with `pad`.
pub fn fix_str_length(s: &str, length: usize, pad: char) -> String {
    let chars: Vec<char> = s.chars().collect();

    if chars.len() > length {
        chars[chars.len() - length..].iter().collect()
    } else if chars.len() < length {
        let mut out: String = std::iter::repeat(pad).take(length - chars.len()).collect();
        out.push_str(s);
        out
    } else {
        s.to_string()
    }
}

/// Rounds a price to two decimal places.
pub fn ceil_two_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_passes_absolute_links_through() {
        assert_eq!(
            image_url("https://cdn.example.com/a.png", "http://localhost/storage"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn image_url_joins_relative_paths() {
        assert_eq!(
            image_url("avatars/1.png", "http://localhost/storage/"),
            "http://localhost/storage/avatars/1.png"
        );
    }

    #[test]
    fn image_tag_uses_grid_defaults() {
        let tag = image_tag("a.png", "http://localhost", None, None);
        assert_eq!(
            tag,
            "<img width='50' height='50' src='http://localhost/a.png' />"
        );
    }

    #[test]
    fn fix_str_length_pads_and_truncates() {
        assert_eq!(fix_str_length("42", 5, '0'), "00042");
        assert_eq!(fix_str_length("1234567", 5, '0'), "34567");
        assert_eq!(fix_str_length("12345", 5, '0'), "12345");
    }

    #[test]
    fn ceil_two_price_rounds_to_cents() {
        assert_eq!(ceil_two_price(9.996), 10.0);
        assert_eq!(ceil_two_price(9.994), 9.99);
    }
}
