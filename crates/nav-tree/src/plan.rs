/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Plan construction: a recursive, asynchronous diff between a navigation
//! request and the previous navigation's realized viewport state.
//!
//! One pass per navigation attempt. The pass either fails with a redirect,
//! or walks every viewport the router knows, picks an activation strategy
//! per viewport, and recurses into child routers for viewports that keep
//! their component. All child recursions for one pass run concurrently and
//! the pass completes only after every one of them has.

use std::fmt;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, try_join_all};
use indexmap::IndexMap;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::component::ComponentHandle;
use crate::config::ViewportConfig;
use crate::params::has_different_parameter_values;
use crate::redirect::Redirect;
use crate::request::NavigationRequest;
use crate::url_resolve::resolve_url;

/// What happens to the component currently displayed in a viewport.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivationStrategy {
    /// The existing component and its children are left untouched.
    NoChange,
    /// The existing component is kept but its navigation lifecycle re-runs
    /// with the new parameters.
    InvokeLifecycle,
    /// The existing component is torn down and a new one instantiated.
    Replace,
}

impl fmt::Display for ActivationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivationStrategy::NoChange => "no-change",
            ActivationStrategy::InvokeLifecycle => "invoke-lifecycle",
            ActivationStrategy::Replace => "replace",
        };
        f.write_str(name)
    }
}

/// The decision for one viewport.
#[derive(Clone, Debug)]
pub struct ViewportPlan {
    pub name: String,
    /// The configuration the viewport will be activated from.
    pub config: ViewportConfig,
    pub strategy: ActivationStrategy,
    /// The component currently displayed, when there was a previous
    /// navigation.
    pub prev_component: Option<ComponentHandle>,
    pub prev_module_id: Option<String>,
    /// Present only when the strategy keeps the component and the previous
    /// component owns a child router. Carries its own nested plan.
    pub child_request: Option<Arc<NavigationRequest>>,
}

/// A completed plan: one [`ViewportPlan`] per viewport, iterated in the
/// router's registration order.
#[derive(Clone, Debug, Default)]
pub struct NavigationPlan {
    entries: IndexMap<String, ViewportPlan>,
}

impl NavigationPlan {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, viewport_plan: ViewportPlan) {
        self.entries
            .insert(viewport_plan.name.clone(), viewport_plan);
    }

    pub fn get(&self, name: &str) -> Option<&ViewportPlan> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ViewportPlan> {
        self.entries.get_mut(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ViewportPlan)> {
        self.entries
            .iter()
            .map(|(name, viewport_plan)| (name.as_str(), viewport_plan))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Failure outcomes of a planning pass.
#[derive(Debug)]
pub enum PlanError {
    /// The route declares a redirect. Not a fault; the pipeline dispatches
    /// the resolved location instead of continuing.
    Redirect(Redirect),
    /// A child router failed to resolve its sub-request.
    ChildResolution(String),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::Redirect(redirect) => write!(f, "redirect to {}", redirect.url),
            PlanError::ChildResolution(e) => write!(f, "child route resolution failed: {e}"),
        }
    }
}

impl std::error::Error for PlanError {}

/// Pipeline step that plans a navigation request and attaches the result.
///
/// On failure nothing is attached; the caller dispatches the redirect or
/// surfaces the error.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildNavigationPlanStep;

impl BuildNavigationPlanStep {
    pub async fn run(&self, request: &Arc<NavigationRequest>) -> Result<(), PlanError> {
        let plan = build_navigation_plan(request, false).await?;
        request.attach_plan(plan);
        Ok(())
    }
}

/// Build the navigation plan for `request`.
///
/// Fails with [`PlanError::Redirect`] when the route configuration declares a
/// redirect target, resolved against the accumulated base URL of the
/// request's ancestors with the raw query string re-attached.
///
/// With no previous navigation, every viewport the router registers is
/// planned as a full replace. Otherwise each previously realized viewport is
/// diffed against the new configuration; strategy precedence is: changed
/// module target, then the component's own override, then the declared route
/// override, then parameter changes (or `force_lifecycle_minimum`), then
/// no-change. Viewports that keep their component and own a child router are
/// recursed into concurrently; any failing branch fails the pass.
pub async fn build_navigation_plan(
    request: &Arc<NavigationRequest>,
    force_lifecycle_minimum: bool,
) -> Result<NavigationPlan, PlanError> {
    plan_request(Arc::clone(request), force_lifecycle_minimum).await
}

fn plan_request(
    request: Arc<NavigationRequest>,
    force_lifecycle_minimum: bool,
) -> BoxFuture<'static, Result<NavigationPlan, PlanError>> {
    async move {
        let config = Arc::clone(request.config());

        if let Some(target) = config.redirect.as_deref() {
            let mut location = resolve_url(target, &ancestor_base_url(&request));
            if !request.query_string().is_empty() {
                location.push('?');
                location.push_str(request.query_string());
            }
            debug!("redirecting '{}' to '{location}'", request.fragment());
            return Err(PlanError::Redirect(Redirect::new(location)));
        }

        let router = Arc::clone(request.router());
        let mut plan = NavigationPlan::new();

        let Some(previous) = request.previous().cloned() else {
            for name in router.viewport_names() {
                let mut viewport_config =
                    config.viewports.get(&name).cloned().unwrap_or_default();
                if viewport_config.module_id.is_none()
                    && let Some(fallback) = router.viewport_default(&name)
                {
                    viewport_config = fallback;
                }
                plan.insert(ViewportPlan {
                    name,
                    config: viewport_config,
                    strategy: ActivationStrategy::Replace,
                    prev_component: None,
                    prev_module_id: None,
                    child_request: None,
                });
            }
            return Ok(plan);
        };

        let params_changed = has_different_parameter_values(&previous, &request);
        let mut pending = Vec::new();

        for (name, activation) in previous.viewport_activations() {
            // A viewport the new route leaves unconfigured keeps showing what
            // it showed before.
            let mut viewport_config = match config.viewports.get(&name) {
                Some(declared) => declared.clone(),
                None => activation.config.clone(),
            };
            if viewport_config.module_id.is_none()
                && let Some(fallback) = router.viewport_default(&name)
            {
                viewport_config = fallback;
            }

            let strategy = if activation.module_id != viewport_config.module_id {
                ActivationStrategy::Replace
            } else if let Some(provider) =
                activation.component.view_model.activation_strategy_provider()
            {
                provider.determine_activation_strategy(request.lifecycle_args())
            } else if let Some(declared) = config.activation_strategy {
                declared
            } else if params_changed || force_lifecycle_minimum {
                ActivationStrategy::InvokeLifecycle
            } else {
                ActivationStrategy::NoChange
            };
            trace!("viewport '{name}' planned as {strategy}");

            plan.insert(ViewportPlan {
                name: name.clone(),
                config: viewport_config,
                strategy,
                prev_component: Some(activation.component.clone()),
                prev_module_id: activation.module_id.clone(),
                child_request: None,
            });

            if strategy != ActivationStrategy::Replace
                && let Some(child_router) = activation.component.child_router.clone()
            {
                let path = request.wildcard_path();
                let parent = Arc::clone(&request);
                let force_child = strategy == ActivationStrategy::InvokeLifecycle;
                pending.push(async move {
                    let child = child_router.resolve_request(path, parent).await?;
                    let child_plan = plan_request(Arc::clone(&child), force_child).await?;
                    child.attach_plan(child_plan);
                    Ok::<_, PlanError>((name, child))
                });
            }
        }

        for (name, child) in try_join_all(pending).await? {
            if let Some(viewport_plan) = plan.get_mut(&name) {
                viewport_plan.child_request = Some(child);
            }
        }

        Ok(plan)
    }
    .boxed()
}

/// Concatenated base URLs of every ancestor request, outermost first,
/// prefixed with the root separator.
fn ancestor_base_url(request: &NavigationRequest) -> String {
    let mut segments = Vec::new();
    let mut ancestor = request.parent();
    while let Some(current) = ancestor {
        segments.push(current.base_url());
        ancestor = current.parent();
    }
    segments.reverse();

    let mut base = String::from("/");
    for segment in &segments {
        base.push_str(segment);
    }
    base
}
