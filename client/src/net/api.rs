//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! dashboard fetch failures degrade UI behavior without crashing
//! hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{SamplePoint, ServiceSummary, StatusOverview, User};

#[cfg(any(test, feature = "hydrate"))]
fn service_history_endpoint(name: &str) -> String {
    format!("/api/services/{name}/history")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(status: u16) -> String {
    if status == 401 {
        "Invalid email or password.".to_owned()
    } else {
        format!("Login failed: {status}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn register_error_message(status: u16) -> String {
    match status {
        409 => "An account with this email already exists.".to_owned(),
        400 => "Check the registration fields and try again.".to_owned(),
        _ => format!("Registration failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn services_failed_message(status: u16) -> String {
    format!("service fetch failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/auth/login`, returning the authenticated user.
///
/// # Errors
///
/// Returns a display-ready message if the request fails or the
/// credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_error_message(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`, returning the new
/// (already signed-in) user.
///
/// # Errors
///
/// Returns a display-ready message if the request fails or is rejected.
pub async fn register(name: &str, email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(register_error_message(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch service summaries from `/api/services`.
///
/// # Errors
///
/// Returns a message string if the request fails or the session is gone.
pub async fn fetch_services() -> Result<Vec<ServiceSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/services")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(services_failed_message(resp.status()));
        }
        resp.json::<Vec<ServiceSummary>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch recent probe history for one service.
///
/// # Errors
///
/// Returns a message string if the request fails.
pub async fn fetch_service_history(name: &str) -> Result<Vec<SamplePoint>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = service_history_endpoint(name);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(services_failed_message(resp.status()));
        }
        resp.json::<Vec<SamplePoint>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err("not available on server".to_owned())
    }
}

/// Fetch fleet counters from `/api/status`.
/// Returns `None` on failure; the stat row simply stays empty.
pub async fn fetch_overview() -> Option<StatusOverview> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/status").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<StatusOverview>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
