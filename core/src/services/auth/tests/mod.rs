//! Tests for the login/refresh/logout flows
