/// Length of `text` in code points. Display width is not considered.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Center `text` inside `width` columns, putting the odd extra space on the right.
///
/// Text that is already `width` or longer is returned unchanged.
pub fn center(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len >= width {
        return text.to_string();
    }

    let padding = width - len;
    let left = padding / 2;
    let right = padding - left;

    let mut centered = String::with_capacity(text.len() + padding);
    centered.extend(std::iter::repeat_n(' ', left));
    centered.push_str(text);
    centered.extend(std::iter::repeat_n(' ', right));
    centered
}
