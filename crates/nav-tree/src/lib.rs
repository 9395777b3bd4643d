/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Navigation planning core for nested viewport routers.
//!
//! Given a navigation request and the previous navigation's realized state,
//! decide per viewport whether to replace the displayed component, re-invoke
//! its lifecycle, leave it alone, or redirect the whole navigation.
//!
//! Core pieces:
//! - [`build_navigation_plan`]: the recursive planner
//! - [`has_different_parameter_values`]: parameter diffing between requests
//! - [`NavigationRequest`]: one navigation attempt, linked to its
//!   predecessor and to the enclosing router's request
//! - [`Router`] / [`ViewModel`]: seams implemented by the surrounding
//!   routing pipeline
//!
//! The crate is executor-agnostic: planning futures are `Send` and suspend
//! only on child router resolution, so any executor can drive them.

pub mod component;
pub mod config;
pub mod params;
pub mod plan;
pub mod redirect;
pub mod request;
pub mod router;
pub mod url_resolve;

pub use component::{ActivationStrategyProvider, ComponentHandle, LifecycleArgs, ViewModel};
pub use config::{RouteConfig, ViewportConfig};
pub use params::has_different_parameter_values;
pub use plan::{
    ActivationStrategy, BuildNavigationPlanStep, NavigationPlan, PlanError, ViewportPlan,
    build_navigation_plan,
};
pub use redirect::{Redirect, RedirectOptions};
pub use request::{
    NavigationOptions, NavigationRequest, NavigationRequestInit, ParamMap, ViewportActivation,
};
pub use router::Router;
pub use url_resolve::resolve_url;
