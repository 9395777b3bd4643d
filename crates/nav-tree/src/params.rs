/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Parameter diffing between consecutive navigation requests.

use crate::request::NavigationRequest;

/// Did parameter values change between `prev` and `next`?
///
/// The catch-all parameter is excluded when the next route declares a child
/// router: its value is the child's whole sub-path and changes there are the
/// child router's business. Query parameters participate only when `next`
/// opts in via `compare_query_params`, and the catch-all exclusion does not
/// apply to them. A key present on one side only counts as a difference.
pub fn has_different_parameter_values(prev: &NavigationRequest, next: &NavigationRequest) -> bool {
    let wildcard = if next.config().has_child_router {
        next.config().wildcard_name()
    } else {
        None
    };

    for key in prev.params().keys().chain(next.params().keys()) {
        if wildcard == Some(key.as_str()) {
            continue;
        }
        if prev.params().get(key) != next.params().get(key) {
            return true;
        }
    }

    if !next.options().compare_query_params {
        return false;
    }

    for key in prev.query_params().keys().chain(next.query_params().keys()) {
        if prev.query_params().get(key) != next.query_params().get(key) {
            return true;
        }
    }

    false
}
