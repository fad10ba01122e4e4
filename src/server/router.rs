use axum::{
    routing::{get, patch, post, put},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        admin::{
            AttendanceDto, CreateInventoryDto, CreatePurchaseRequestDto, DailyReportDto,
            InventoryDto, PurchaseRequestDto, PurchaseStatus,
        },
        api::{ErrorDto, MessageDto},
        menu::{CreateMenuItemDto, MealType, MenuItemDto, RecipeLineDto},
        order::{CreateOrderDto, OrderDto, PaymentType},
        review::{CreateReviewDto, ReviewDto},
        user::{LoginDto, RegisterUserDto, Role, TokenDto, UserDto},
    },
    server::{
        controller::{
            admin::{self, ADMIN_TAG},
            auth::{self, AUTH_TAG},
            health::{self, HEALTH_TAG},
            menu::{self, MENU_TAG},
            order::{self, ORDER_TAG},
            review::{self, REVIEW_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "School Canteen API"),
    paths(
        health::health,
        auth::register,
        auth::login,
        auth::me,
        menu::list_menu,
        menu::create_menu_item,
        order::place_order,
        order::get_my_orders,
        order::list_orders,
        order::receive_order,
        review::create_review,
        review::get_item_reviews,
        review::get_all_reviews,
        admin::create_purchase_request,
        admin::get_purchase_requests,
        admin::approve_purchase_request,
        admin::reject_purchase_request,
        admin::get_daily_report,
        admin::get_attendance,
        admin::get_inventory,
        admin::create_inventory,
        admin::update_inventory,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        Role,
        RegisterUserDto,
        LoginDto,
        TokenDto,
        UserDto,
        MealType,
        RecipeLineDto,
        CreateMenuItemDto,
        MenuItemDto,
        PaymentType,
        CreateOrderDto,
        OrderDto,
        CreateReviewDto,
        ReviewDto,
        PurchaseStatus,
        CreatePurchaseRequestDto,
        PurchaseRequestDto,
        CreateInventoryDto,
        InventoryDto,
        DailyReportDto,
        AttendanceDto,
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = HEALTH_TAG, description = "Service status"),
        (name = AUTH_TAG, description = "Registration, login and the current user"),
        (name = MENU_TAG, description = "Dishes on sale and their recipes"),
        (name = ORDER_TAG, description = "Placing and receiving orders"),
        (name = REVIEW_TAG, description = "Dish reviews"),
        (name = ADMIN_TAG, description = "Purchase requests, reports and inventory"),
    )
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/menu",
            get(menu::list_menu).post(menu::create_menu_item),
        )
        .route(
            "/api/orders",
            get(order::list_orders).post(order::place_order),
        )
        .route("/api/orders/my", get(order::get_my_orders))
        .route("/api/orders/{order_id}/receive", patch(order::receive_order))
        .route("/api/reviews", post(review::create_review))
        .route("/api/reviews/item/{item_id}", get(review::get_item_reviews))
        .route("/api/reviews/all", get(review::get_all_reviews))
        .route(
            "/api/admin/purchase-requests",
            get(admin::get_purchase_requests).post(admin::create_purchase_request),
        )
        .route(
            "/api/admin/purchase-requests/{request_id}/approve",
            patch(admin::approve_purchase_request),
        )
        .route(
            "/api/admin/purchase-requests/{request_id}/reject",
            patch(admin::reject_purchase_request),
        )
        .route("/api/admin/stats/daily-report", get(admin::get_daily_report))
        .route("/api/admin/stats/attendance", get(admin::get_attendance))
        .route(
            "/api/admin/inventory",
            get(admin::get_inventory).post(admin::create_inventory),
        )
        .route("/api/admin/inventory/{item_id}", put(admin::update_inventory))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
