/// Parse and validate a Java identifier given on the command line.
///
/// Class names may be qualified (`com.example.UserService`); only the simple
/// name is returned since declarations are indexed by simple name.
///
/// # Examples
///
/// Valid: UserService, com.example.UserService, _internal, $Proxy1
/// Invalid: 1Service, user-service, "", com..Service
///
/// # Errors
///
/// Returns an error message if any segment is not a valid identifier.
pub fn parse_java_identifier(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    for segment in s.split('.') {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else {
            return Err(format!("Name contains an empty segment: '{}'", s));
        };
        if !first.is_alphabetic() && first != '_' && first != '$' {
            return Err(format!(
                "Name must start with a letter, underscore, or dollar sign: '{}'",
                s
            ));
        }
        if chars.any(|c| !c.is_alphanumeric() && c != '_' && c != '$') {
            return Err(format!(
                "Name can only contain letters, numbers, underscores, or dollar signs: '{}'",
                s
            ));
        }
    }

    Ok(s.rsplit('.').next().unwrap_or(s).to_string())
}
