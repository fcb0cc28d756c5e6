/// Slug derivation for usernames
///
/// A slug is a URL-safe, lowercase, hyphenated identifier derived
/// deterministically from a display name. Slugs are computed once at user
/// creation and stored alongside the username; the `users.slug` column
/// carries a UNIQUE constraint.

/// Derives a URL-safe slug from a username.
///
/// # Example
///
/// ```
/// use taskmanager_shared::slug::slugify_username;
///
/// assert_eq!(slugify_username("John Doe"), "john-doe");
/// ```
pub fn slugify_username(username: &str) -> String {
    ::slug::slugify(username)
}
