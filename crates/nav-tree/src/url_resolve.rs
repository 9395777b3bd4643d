/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Resolution of possibly-relative redirect targets against a base URL.

/// Resolve `fragment` against `base_url`.
///
/// Rooted paths (`/…`, `#/…`) and absolute URLs (`scheme://…`, `//…`) pass
/// through unchanged. Anything else is joined onto the base with exactly one
/// slash at the seam. Results are push-state style absolute paths; hash
/// decoration is left to the history layer.
pub fn resolve_url(fragment: &str, base_url: &str) -> String {
    if is_rooted_path(fragment) || is_absolute_url(fragment) {
        return fragment.to_string();
    }

    let mut path = String::new();
    if !base_url.is_empty() && !base_url.starts_with('/') {
        path.push('/');
    }
    path.push_str(base_url);
    if !path.ends_with('/') {
        path.push('/');
    }
    path.push_str(fragment);
    path
}

fn is_rooted_path(fragment: &str) -> bool {
    fragment.starts_with('/') || fragment.starts_with("#/")
}

fn is_absolute_url(fragment: &str) -> bool {
    if fragment.starts_with("//") {
        return true;
    }
    let Some((scheme, rest)) = fragment.split_once(':') else {
        return false;
    };
    if !rest.starts_with("//") {
        return false;
    }
    let mut chars = scheme.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
