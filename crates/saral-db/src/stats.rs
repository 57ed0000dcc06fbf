//! # Dashboard Statistics
//!
//! Aggregated sales figures for the dashboard header.
//!
//! ## Concurrency
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Dashboard Stat Loading                               │
//! │                                                                         │
//! │  dashboard_stats(db)                                                   │
//! │       │                                                                 │
//! │       ├──────────────┬──────────────┐                                   │
//! │       ▼              ▼              ▼                                   │
//! │  sum(today)     sum(month)     sum(year)     ← run concurrently        │
//! │       │              │              │                                   │
//! │       └──────────────┴──────────────┘                                   │
//! │       ▼                                                                 │
//! │  All three succeed → Some(DashboardStats)                              │
//! │  Any one fails     → warn! + None (partial stats never shown)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A stat failure is not an error for the caller: the dashboard renders
//! without figures and the failure stays in the logs.

use chrono::{Datelike, Local, NaiveDate};
use tracing::warn;

use crate::pool::Database;
use crate::repository::bill::BillFilter;
use saral_core::Money;

/// Sales totals for the three dashboard windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub today: Money,
    pub this_month: Money,
    pub this_year: Money,
}

/// Loads the three dashboard totals concurrently, anchored at `today`.
///
/// All-or-nothing: a failure in any window logs a warning and yields
/// `None` rather than a partially filled stats block.
pub async fn dashboard_stats_at(db: &Database, today: NaiveDate) -> Option<DashboardStats> {
    let bills = db.bills();

    let day_filter = BillFilter::for_day(today);
    let month_filter = BillFilter::for_month(today.year(), today.month());
    let year_filter = BillFilter::for_year(today.year());

    let (day, month, year) = tokio::join!(
        bills.sum_total(&day_filter),
        bills.sum_total(&month_filter),
        bills.sum_total(&year_filter),
    );

    match (day, month, year) {
        (Ok(today), Ok(this_month), Ok(this_year)) => Some(DashboardStats {
            today,
            this_month,
            this_year,
        }),
        (day, month, year) => {
            for (window, result) in [("day", &day), ("month", &month), ("year", &year)] {
                if let Err(e) = result {
                    warn!(window, error = %e, "Dashboard stat query failed");
                }
            }
            None
        }
    }
}

/// [`dashboard_stats_at`] anchored at the current local date.
pub async fn dashboard_stats(db: &Database) -> Option<DashboardStats> {
    dashboard_stats_at(db, Local::now().date_naive()).await
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;
    use chrono::NaiveDate;
    use saral_core::{BillStatus, NewBill, NewBillItem, PaymentMode};

    fn bill_on(date: chrono::NaiveDateTime, total_paise: i64) -> NewBill {
        NewBill {
            customer_name: "Asha".to_string(),
            customer_phone: "9611961979".to_string(),
            date,
            total_amount: Money::from_paise(total_paise),
            discount: Money::zero(),
            status: BillStatus::Paid,
            payment_mode: Some(PaymentMode::Cash),
            items: vec![NewBillItem {
                item_name: "Silk Saree".to_string(),
                price: Money::from_paise(total_paise),
                quantity: 1,
                discount: Money::zero(),
                item_total: Money::from_paise(total_paise),
            }],
        }
    }

    #[tokio::test]
    async fn test_stats_cover_day_month_year_windows() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let anchor = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();

        // Same day, same month, same year, previous year
        let noon = |y, m, d: u32| {
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        };
        db.bills().create(&bill_on(noon(2026, 8, 29), 10000)).await.unwrap();
        db.bills().create(&bill_on(noon(2026, 8, 3), 20000)).await.unwrap();
        db.bills().create(&bill_on(noon(2026, 2, 1), 40000)).await.unwrap();
        db.bills().create(&bill_on(noon(2025, 8, 29), 80000)).await.unwrap();

        let stats = dashboard_stats_at(&db, anchor).await.unwrap();
        assert_eq!(stats.today.paise(), 10000);
        assert_eq!(stats.this_month.paise(), 30000);
        assert_eq!(stats.this_year.paise(), 70000);
    }

    #[tokio::test]
    async fn test_stats_zero_on_empty_store() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let anchor = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();

        let stats = dashboard_stats_at(&db, anchor).await.unwrap();
        assert!(stats.today.is_zero());
        assert!(stats.this_month.is_zero());
        assert!(stats.this_year.is_zero());
    }

    #[tokio::test]
    async fn test_stats_none_when_store_unavailable() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(dashboard_stats_at(&db, NaiveDate::from_ymd_opt(2026, 8, 29).unwrap())
            .await
            .is_none());
    }
}
