/// Name shown for a signed-in user: the local part of their email, or
/// `Guest` when there is none.
pub fn derive_display_name(email: Option<&str>) -> String {
    match email {
        Some(email) if !email.is_empty() => email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string(),
        _ => "Guest".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_part_or_guest() {
        assert_eq!(derive_display_name(Some("jane.doe@example.com")), "jane.doe");
        assert_eq!(derive_display_name(Some("a@b@c")), "a");
        assert_eq!(derive_display_name(Some("nobody")), "nobody");
        assert_eq!(derive_display_name(Some("")), "Guest");
        assert_eq!(derive_display_name(None), "Guest");
    }
}
