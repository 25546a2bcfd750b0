use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use bookstack_core::{PaginationMeta, PaginationParams};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, RegisterRequestDto};
use crate::modules::books::model::{
    Book, BookFilterParams, Category, CreateBookDto, CreateCategoryDto, PaginatedBooksResponse,
    UpdateBookDto,
};
use crate::modules::borrow::model::{BorrowDeniedResponse, BorrowRecord};
use crate::modules::notifications::model::{
    Notification, NotificationPageMeta, PaginatedNotificationsResponse,
};
use crate::modules::users::model::{
    ChangePasswordDto, LoanRecord, MembershipTier, UpdateMembershipDto, UpdateProfileDto, User,
    UserRole,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::update_profile,
        crate::modules::users::controller::change_password,
        crate::modules::users::controller::get_loan_history,
        crate::modules::users::controller::update_membership,
        crate::modules::books::controller::create_book,
        crate::modules::books::controller::get_books,
        crate::modules::books::controller::get_book_by_id,
        crate::modules::books::controller::update_book,
        crate::modules::books::controller::delete_book,
        crate::modules::books::controller::get_categories,
        crate::modules::books::controller::create_category,
        crate::modules::borrow::controller::borrow_book,
        crate::modules::borrow::controller::return_book,
        crate::modules::notifications::controller::get_notifications,
    ),
    components(
        schemas(
            User,
            UserRole,
            MembershipTier,
            UpdateProfileDto,
            ChangePasswordDto,
            UpdateMembershipDto,
            LoanRecord,
            RegisterRequestDto,
            LoginRequest,
            LoginResponse,
            ErrorResponse,
            Book,
            Category,
            CreateBookDto,
            UpdateBookDto,
            CreateCategoryDto,
            BookFilterParams,
            PaginatedBooksResponse,
            BorrowRecord,
            BorrowDeniedResponse,
            Notification,
            NotificationPageMeta,
            PaginatedNotificationsResponse,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User authentication endpoints"),
        (name = "Users", description = "Profile and membership endpoints"),
        (name = "Books", description = "Book catalog and category management"),
        (name = "Borrowing", description = "Borrow and return endpoints"),
        (name = "Notifications", description = "Admin activity feed")
    ),
    info(
        title = "Bookstack API",
        version = "0.1.0",
        description = "A library-management REST API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication.",
        contact(
            name = "API Support",
            email = "support@bookstack.dev"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
