//! Admin user table.

#[cfg(test)]
#[path = "users_table_test.rs"]
mod users_table_test;

use leptos::prelude::*;

use crate::net::types::AdminUser;
use crate::state::auth::Role;

/// Badge styling class for a user's role.
fn role_badge_class(role: Role) -> &'static str {
    match role {
        Role::Admin => "badge--primary",
        Role::Subscriber => "badge--success",
        Role::User => "badge--warning",
    }
}

/// Read-only table of registered users for the admin dashboard.
#[component]
pub fn UsersTable(users: Vec<AdminUser>) -> impl IntoView {
    view! {
        <table class="users-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Role"</th>
                </tr>
            </thead>
            <tbody>
                {users
                    .into_iter()
                    .map(|user| {
                        view! {
                            <tr>
                                <td>{user.id}</td>
                                <td>{user.name}</td>
                                <td>
                                    <span class=format!("badge {}", role_badge_class(user.role))>
                                        {user.role.as_str()}
                                    </span>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
