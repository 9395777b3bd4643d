/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Navigation requests and the realized per-viewport state they carry.
//!
//! One `NavigationRequest` exists per navigation attempt and router level.
//! Requests link backwards twice: `previous` is the strong history chain to
//! the request being superseded, `parent` is a weak handle to the enclosing
//! router's request. The parent plan strongly owns child requests, so the
//! back-edge must not be strong or the pair would leak.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use indexmap::IndexMap;
use log::warn;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::{ComponentHandle, LifecycleArgs};
use crate::config::{RouteConfig, ViewportConfig};
use crate::plan::NavigationPlan;
use crate::router::Router;

/// Resolved parameters keyed by name. Path parameters are strings; query
/// parameters keep whatever shape the query parser produced.
pub type ParamMap = HashMap<String, Value>;

/// Per-navigation options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationOptions {
    /// When set, query parameter changes count as parameter changes for
    /// strategy selection.
    pub compare_query_params: bool,
}

/// Everything needed to construct a [`NavigationRequest`]. Built by the
/// route-matching layer; the `parent` handle is downgraded on construction.
pub struct NavigationRequestInit {
    pub fragment: String,
    pub query_string: String,
    pub params: ParamMap,
    pub query_params: ParamMap,
    pub config: Arc<RouteConfig>,
    pub options: NavigationOptions,
    pub router: Arc<dyn Router>,
    pub parent: Option<Arc<NavigationRequest>>,
    pub previous: Option<Arc<NavigationRequest>>,
}

/// One navigation attempt at one router level.
pub struct NavigationRequest {
    fragment: String,
    query_string: String,
    params: ParamMap,
    query_params: ParamMap,
    config: Arc<RouteConfig>,
    options: NavigationOptions,
    router: Arc<dyn Router>,
    parent: Option<Weak<NavigationRequest>>,
    previous: Option<Arc<NavigationRequest>>,
    plan: OnceLock<NavigationPlan>,
    viewport_activations: RwLock<IndexMap<String, ViewportActivation>>,
}

impl NavigationRequest {
    pub fn new(init: NavigationRequestInit) -> Arc<Self> {
        Arc::new(Self {
            fragment: init.fragment,
            query_string: init.query_string,
            params: init.params,
            query_params: init.query_params,
            config: init.config,
            options: init.options,
            router: init.router,
            parent: init.parent.map(|parent| Arc::downgrade(&parent)),
            previous: init.previous,
            plan: OnceLock::new(),
            viewport_activations: RwLock::new(IndexMap::new()),
        })
    }

    /// The matched URL fragment for this router level.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// The raw query string, without the leading `?`.
    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    pub fn params(&self) -> &ParamMap {
        &self.params
    }

    pub fn query_params(&self) -> &ParamMap {
        &self.query_params
    }

    pub fn config(&self) -> &Arc<RouteConfig> {
        &self.config
    }

    pub fn options(&self) -> NavigationOptions {
        self.options
    }

    pub fn router(&self) -> &Arc<dyn Router> {
        &self.router
    }

    /// The enclosing router's request, when it is still alive.
    pub fn parent(&self) -> Option<Arc<NavigationRequest>> {
        self.parent.as_ref().and_then(|parent| parent.upgrade())
    }

    /// The request this navigation supersedes.
    pub fn previous(&self) -> Option<&Arc<NavigationRequest>> {
        self.previous.as_ref()
    }

    /// The plan attached by a completed planning pass, if any.
    pub fn plan(&self) -> Option<&NavigationPlan> {
        self.plan.get()
    }

    /// Attach the completed plan. The slot is write-once; a second attach is
    /// ignored and the first plan kept.
    pub fn attach_plan(&self, plan: NavigationPlan) {
        if self.plan.set(plan).is_err() {
            warn!("navigation plan already attached for '{}'", self.fragment);
        }
    }

    /// Record a realized viewport, keyed by viewport name. Written by the
    /// activation phase once a component is live; read by the next
    /// navigation's planning pass.
    pub fn record_viewport_activation(&self, activation: ViewportActivation) {
        self.viewport_activations
            .write()
            .insert(activation.name.clone(), activation);
    }

    /// Snapshot of the realized viewports in recording order.
    pub fn viewport_activations(&self) -> IndexMap<String, ViewportActivation> {
        self.viewport_activations.read().clone()
    }

    /// The path remainder the catch-all segment matched, with the raw query
    /// string re-appended. Handed to child routers for sub-resolution.
    pub fn wildcard_path(&self) -> String {
        let mut path = self.wildcard_remainder().unwrap_or_default().to_string();
        if !self.query_string.is_empty() {
            path.push('?');
            path.push_str(&self.query_string);
        }
        path
    }

    /// This request's own contribution to the accumulated base URL: the
    /// fragment truncated before the wildcard remainder. The whole fragment
    /// when the route has no catch-all or the remainder does not occur.
    pub fn base_url(&self) -> String {
        match self.wildcard_remainder() {
            Some(remainder) if !remainder.is_empty() => match self.fragment.rfind(remainder) {
                Some(idx) => self.fragment[..idx].to_string(),
                None => self.fragment.clone(),
            },
            _ => self.fragment.clone(),
        }
    }

    pub fn lifecycle_args(&self) -> LifecycleArgs<'_> {
        LifecycleArgs {
            params: &self.params,
            config: self.config.as_ref(),
            request: self,
        }
    }

    fn wildcard_remainder(&self) -> Option<&str> {
        let name = self.config.wildcard_name()?;
        self.params.get(name)?.as_str()
    }
}

impl fmt::Debug for NavigationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationRequest")
            .field("fragment", &self.fragment)
            .field("query_string", &self.query_string)
            .field("params", &self.params)
            .field("planned", &self.plan.get().is_some())
            .finish_non_exhaustive()
    }
}

/// A viewport the activation phase has realized: the name, the module target
/// that was actually activated, the configuration it was activated from, and
/// the live component.
#[derive(Clone, Debug)]
pub struct ViewportActivation {
    pub name: String,
    pub module_id: Option<String>,
    pub config: ViewportConfig,
    pub component: ComponentHandle,
}

impl ViewportActivation {
    pub fn new(name: impl Into<String>, config: ViewportConfig, component: ComponentHandle) -> Self {
        let module_id = config.module_id.clone();
        Self {
            name: name.into(),
            module_id,
            config,
            component,
        }
    }
}
