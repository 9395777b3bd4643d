use std::sync::Arc;

use nav_tree::{
    NavigationOptions, NavigationRequest, NavigationRequestInit, ParamMap, PlanError, RouteConfig,
    Router, build_navigation_plan,
};

use crate::harness;

fn expect_redirect(result: Result<nav_tree::NavigationPlan, PlanError>) -> nav_tree::Redirect {
    match result {
        Err(PlanError::Redirect(redirect)) => redirect,
        Ok(plan) => panic!("expected a redirect, got a plan with {} viewports", plan.len()),
        Err(other) => panic!("expected a redirect, got {other}"),
    }
}

#[test]
fn redirect_short_circuits_planning() {
    let router = harness::TestRouter::new(&["main"]).build();
    let config = RouteConfig {
        route: "home".to_string(),
        redirect: Some("login".to_string()),
        ..RouteConfig::default()
    };
    let request = harness::request(&router, config, None);

    let redirect = expect_redirect(pollster::block_on(build_navigation_plan(&request, false)));
    assert_eq!(redirect.url, "/login");
    assert!(redirect.options.trigger);
    assert!(redirect.options.replace);
}

#[test]
fn redirect_reappends_the_query_string() {
    let router = harness::TestRouter::new(&["main"]).build();
    let request = NavigationRequest::new(NavigationRequestInit {
        fragment: "home".to_string(),
        query_string: "tab=2".to_string(),
        params: ParamMap::new(),
        query_params: ParamMap::new(),
        config: Arc::new(RouteConfig {
            route: "home".to_string(),
            redirect: Some("login".to_string()),
            ..RouteConfig::default()
        }),
        options: NavigationOptions::default(),
        router: Arc::clone(&router) as Arc<dyn Router>,
        parent: None,
        previous: None,
    });

    let redirect = expect_redirect(pollster::block_on(build_navigation_plan(&request, false)));
    assert_eq!(redirect.url, "/login?tab=2");
}

#[test]
fn rooted_redirect_target_passes_through_unchanged() {
    let router = harness::TestRouter::new(&["main"]).build();
    let config = RouteConfig {
        route: "home".to_string(),
        redirect: Some("/auth/login".to_string()),
        ..RouteConfig::default()
    };
    let request = harness::request(&router, config, None);

    let redirect = expect_redirect(pollster::block_on(build_navigation_plan(&request, false)));
    assert_eq!(redirect.url, "/auth/login");
}

#[test]
fn absolute_redirect_target_passes_through_unchanged() {
    let router = harness::TestRouter::new(&["main"]).build();
    let config = RouteConfig {
        route: "home".to_string(),
        redirect: Some("https://sso.example/start".to_string()),
        ..RouteConfig::default()
    };
    let request = harness::request(&router, config, None);

    let redirect = expect_redirect(pollster::block_on(build_navigation_plan(&request, false)));
    assert_eq!(redirect.url, "https://sso.example/start");
}

#[test]
fn relative_redirect_resolves_against_the_parent_base() {
    let parent_router = harness::TestRouter::new(&["main"]).build();
    let parent = NavigationRequest::new(NavigationRequestInit {
        fragment: "admin/users/1".to_string(),
        query_string: String::new(),
        params: harness::params(&[("rest", "users/1")]),
        query_params: ParamMap::new(),
        config: Arc::new(RouteConfig {
            route: "admin/*rest".to_string(),
            has_child_router: true,
            ..RouteConfig::default()
        }),
        options: NavigationOptions::default(),
        router: Arc::clone(&parent_router) as Arc<dyn Router>,
        parent: None,
        previous: None,
    });

    let child_router = harness::TestRouter::new(&["default"]).build();
    let child = NavigationRequest::new(NavigationRequestInit {
        fragment: "users/1".to_string(),
        query_string: String::new(),
        params: ParamMap::new(),
        query_params: ParamMap::new(),
        config: Arc::new(RouteConfig {
            route: "users/1".to_string(),
            redirect: Some("login".to_string()),
            ..RouteConfig::default()
        }),
        options: NavigationOptions::default(),
        router: Arc::clone(&child_router) as Arc<dyn Router>,
        parent: Some(Arc::clone(&parent)),
        previous: None,
    });

    let redirect = expect_redirect(pollster::block_on(build_navigation_plan(&child, false)));
    assert_eq!(redirect.url, "/admin/login");
}

#[test]
fn relative_redirect_accumulates_every_ancestor_base() {
    let root_router = harness::TestRouter::new(&["main"]).build();
    let root = NavigationRequest::new(NavigationRequestInit {
        fragment: "app/admin/users".to_string(),
        query_string: String::new(),
        params: harness::params(&[("rest", "admin/users")]),
        query_params: ParamMap::new(),
        config: Arc::new(RouteConfig {
            route: "app/*rest".to_string(),
            has_child_router: true,
            ..RouteConfig::default()
        }),
        options: NavigationOptions::default(),
        router: Arc::clone(&root_router) as Arc<dyn Router>,
        parent: None,
        previous: None,
    });

    let mid_router = harness::TestRouter::new(&["main"]).build();
    let mid = NavigationRequest::new(NavigationRequestInit {
        fragment: "admin/users".to_string(),
        query_string: String::new(),
        params: harness::params(&[("inner", "users")]),
        query_params: ParamMap::new(),
        config: Arc::new(RouteConfig {
            route: "admin/*inner".to_string(),
            has_child_router: true,
            ..RouteConfig::default()
        }),
        options: NavigationOptions::default(),
        router: Arc::clone(&mid_router) as Arc<dyn Router>,
        parent: Some(Arc::clone(&root)),
        previous: None,
    });

    let leaf_router = harness::TestRouter::new(&["default"]).build();
    let leaf = NavigationRequest::new(NavigationRequestInit {
        fragment: "users".to_string(),
        query_string: String::new(),
        params: ParamMap::new(),
        query_params: ParamMap::new(),
        config: Arc::new(RouteConfig {
            route: "users".to_string(),
            redirect: Some("login".to_string()),
            ..RouteConfig::default()
        }),
        options: NavigationOptions::default(),
        router: Arc::clone(&leaf_router) as Arc<dyn Router>,
        parent: Some(Arc::clone(&mid)),
        previous: None,
    });

    let redirect = expect_redirect(pollster::block_on(build_navigation_plan(&leaf, false)));
    assert_eq!(redirect.url, "/app/admin/login");
}
