//! Records decoded from the GitHub REST API.

use serde::{Deserialize, Deserializer, Serialize};

/// A GitHub account as returned by `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Account handle, unique per account.
    pub login: String,
    /// Display name; many accounts never set one.
    #[serde(default, deserialize_with = "non_empty")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub location: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
}

impl Profile {
    /// Name to show for the account, falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

/// One entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
}

/// Profile plus its most recently updated repositories.
///
/// Built in one piece by [`QueryService`](crate::QueryService): the profile is
/// always present, the repository list may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedResult {
    pub profile: Profile,
    /// Server order (most recently updated first).
    pub repositories: Vec<RepositorySummary>,
}

/// GitHub sends both `null` and `""` for unset text fields.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_decodes_github_payload() {
        let profile: Profile = serde_json::from_value(json!({
            "login": "octocat",
            "id": 583231,
            "name": "The Octocat",
            "bio": null,
            "location": "San Francisco",
            "public_repos": 8,
            "followers": 10000,
            "following": 9
        }))
        .unwrap();

        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.name.as_deref(), Some("The Octocat"));
        assert_eq!(profile.bio, None);
        assert_eq!(profile.location.as_deref(), Some("San Francisco"));
        assert_eq!(profile.public_repos, 8);
        assert_eq!(profile.followers, 10000);
    }

    #[test]
    fn empty_strings_become_none() {
        let profile: Profile = serde_json::from_value(json!({
            "login": "quiet",
            "name": "",
            "bio": "   ",
            "location": ""
        }))
        .unwrap();

        assert_eq!(profile.name, None);
        assert_eq!(profile.bio, None);
        assert_eq!(profile.location, None);
        assert_eq!(profile.public_repos, 0);
    }

    #[test]
    fn display_name_falls_back_to_login() {
        let profile: Profile = serde_json::from_value(json!({ "login": "nameless" })).unwrap();
        assert_eq!(profile.display_name(), "nameless");
    }

    #[test]
    fn repository_decodes_without_description() {
        let repo: RepositorySummary = serde_json::from_value(json!({
            "name": "Hello-World",
            "description": null,
            "stargazers_count": 1
        }))
        .unwrap();

        assert_eq!(repo.name, "Hello-World");
        assert_eq!(repo.description, None);
        assert_eq!(repo.stargazers_count, 1);
    }

    #[test]
    fn profile_without_login_is_rejected() {
        let result: Result<Profile, _> = serde_json::from_value(json!({ "name": "x" }));
        assert!(result.is_err());
    }
}
