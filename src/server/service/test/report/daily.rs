use super::*;
use crate::model::order::PaymentType;

/// Tests the daily report after orders placed through the order service.
///
/// Two orders are placed for the day and one of them is received.
///
/// Expected: 2 orders, 1 received, revenue of both prices, 50% attendance
#[tokio::test]
async fn reports_orders_revenue_and_attendance_rate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::user::UserFactory::new(db)
        .balance(500.0)
        .build()
        .await?;
    let student = User::from_entity(student)?;
    let soup = factory::menu_item::MenuItemFactory::new(db)
        .price(40.0)
        .build()
        .await?;
    let pizza = factory::menu_item::MenuItemFactory::new(db)
        .price(70.0)
        .build()
        .await?;
    let day = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();

    let orders = OrderService::new(db);
    let mut placed = Vec::new();
    for menu_item_id in [soup.id, pizza.id] {
        placed.push(
            orders
                .place(PlaceOrderParams {
                    user_id: student.id,
                    menu_item_id,
                    payment_type: PaymentType::Balance,
                    order_date: day,
                })
                .await?,
        );
    }
    orders.receive(&student, placed[0].id).await?;

    let report = ReportService::new(db).daily(day).await?;

    assert_eq!(report.total_orders_count, 2);
    assert_eq!(report.received_meals_count, 1);
    assert_eq!(report.total_revenue, 110.0);
    assert_eq!(report.attendance_rate(), 50.0);

    Ok(())
}

/// Tests the daily report for a day without orders.
///
/// Expected: all figures zero
#[tokio::test]
async fn reports_zero_for_empty_day() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let day = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();

    let dto = ReportService::new(db).daily(day).await?.into_dto();

    assert_eq!(dto.date, day);
    assert_eq!(dto.total_orders_count, 0);
    assert_eq!(dto.total_revenue, 0.0);
    assert_eq!(dto.attendance_rate, 0.0);

    Ok(())
}
