/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Seams for the live components owned by the activation phase.
//!
//! Planning never instantiates or renders components. It only inspects the
//! previous navigation's realized components through these interfaces: does
//! the view model override the activation strategy, and does the component
//! own a child router worth recursing into.

use std::fmt;
use std::sync::Arc;

use crate::config::RouteConfig;
use crate::plan::ActivationStrategy;
use crate::request::{NavigationRequest, ParamMap};
use crate::router::Router;

/// Optional capability of a view model: take over the activation strategy
/// decision for the viewport it is displayed in. When present, its result is
/// used verbatim.
pub trait ActivationStrategyProvider {
    fn determine_activation_strategy(&self, args: LifecycleArgs<'_>) -> ActivationStrategy;
}

/// The view model behind a realized component.
pub trait ViewModel: Send + Sync {
    /// Capability query for the activation strategy override. The default is
    /// no override.
    fn activation_strategy_provider(&self) -> Option<&dyn ActivationStrategyProvider> {
        None
    }
}

/// Reference to a live component held by a viewport activation.
#[derive(Clone)]
pub struct ComponentHandle {
    pub view_model: Arc<dyn ViewModel>,
    pub child_router: Option<Arc<dyn Router>>,
}

impl fmt::Debug for ComponentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentHandle")
            .field("has_child_router", &self.child_router.is_some())
            .finish_non_exhaustive()
    }
}

/// Arguments handed to lifecycle hooks and strategy overrides, borrowed from
/// the navigation request being planned.
#[derive(Clone, Copy)]
pub struct LifecycleArgs<'nav> {
    pub params: &'nav ParamMap,
    pub config: &'nav RouteConfig,
    pub request: &'nav NavigationRequest,
}
