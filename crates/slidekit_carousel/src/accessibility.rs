//! Text for assistive technology

/// Accessible description of the carousel as a whole
///
/// ```rust
/// use slidekit_carousel::accessibility::describe;
///
/// assert_eq!(describe(Some(1), 3, Some("Harbor")), "Carousel item 2 of 3: Harbor");
/// assert_eq!(describe(None, 0, None), "Carousel with 0 items");
/// ```
pub fn describe(index: Option<usize>, count: usize, title: Option<&str>) -> String {
    match index {
        Some(index) => with_title(format!("Carousel item {} of {}", index + 1, count), title),
        None => format!("Carousel with {} items", count),
    }
}

/// Short announcement raised when the active slide changes
pub fn announce(index: usize, count: usize, title: Option<&str>) -> String {
    with_title(format!("Item {} of {}", index + 1, count), title)
}

fn with_title(mut text: String, title: Option<&str>) -> String {
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        text.push_str(": ");
        text.push_str(title);
    }
    text
}
