//! Shared data helpers for the activity listing BDD tests.

use serde_json::{Value, json};

use super::domain::{CommitCount, RepositoryCount};

/// Repository bodies named `repo-{start + 1}` onwards.
pub(crate) fn generate_repositories(owner: &str, start: u32, count: RepositoryCount) -> Vec<Value> {
    (start..start.saturating_add(count.value()))
        .map(|index| {
            let name = format!("repo-{}", index.saturating_add(1));
            json!({
                "name": name,
                "full_name": format!("{owner}/{name}"),
                "private": false,
                "fork": false,
                "html_url": format!("https://github.com/{owner}/{name}"),
                "default_branch": "main"
            })
        })
        .collect()
}

pub(crate) fn generate_commits(repository: &str, count: CommitCount) -> Vec<Value> {
    (0..count.value())
        .map(|index| {
            json!({
                "sha": format!("{repository}-{index}"),
                "html_url": format!("https://github.com/commit/{repository}-{index}"),
                "commit": {
                    "message": format!("Commit {index} on {repository}"),
                    "author": {
                        "name": "Octo Cat",
                        "email": "octo@example.com",
                        "date": "2024-01-01T00:00:00Z"
                    }
                }
            })
        })
        .collect()
}

/// `Link` header for page `page` of `last` on a repository listing.
pub(crate) fn link_header(server_uri: &str, listing_path: &str, page: u32, last: u32) -> String {
    let page_url = |number: u32| {
        format!("{server_uri}{listing_path}?per_page=100&page={number}&sort=updated")
    };

    let mut links = Vec::new();
    if page < last {
        links.push(format!("<{}>; rel=\"next\"", page_url(page.saturating_add(1))));
    }
    if page > 1 {
        links.push(format!("<{}>; rel=\"prev\"", page_url(page.saturating_sub(1))));
        links.push(format!("<{}>; rel=\"first\"", page_url(1)));
    }
    links.push(format!("<{}>; rel=\"last\"", page_url(last)));
    links.join(", ")
}
