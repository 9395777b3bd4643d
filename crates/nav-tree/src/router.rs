/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The router seam planning recurses through.

use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::config::ViewportConfig;
use crate::plan::PlanError;
use crate::request::NavigationRequest;

/// Implemented by the surrounding routing pipeline for each router level.
///
/// Planning treats routers as opaque: it lists their viewports, asks for
/// per-viewport defaults, and hands wildcard path remainders to child routers
/// for asynchronous sub-resolution.
pub trait Router: Send + Sync {
    /// Names of the viewports this router currently manages, in registration
    /// order.
    fn viewport_names(&self) -> Vec<String>;

    /// Registered default configuration for a viewport, substituted when a
    /// candidate configuration resolves to an empty module target.
    fn viewport_default(&self, name: &str) -> Option<ViewportConfig>;

    /// Resolve a wildcard path remainder into a navigation request for this
    /// router level. The returned request must carry `parent` as its parent
    /// handle so base URL accumulation can walk back out.
    fn resolve_request(
        self: Arc<Self>,
        path: String,
        parent: Arc<NavigationRequest>,
    ) -> BoxFuture<'static, Result<Arc<NavigationRequest>, PlanError>>;
}
