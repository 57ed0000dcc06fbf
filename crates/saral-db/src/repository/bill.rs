//! # Bill Repository
//!
//! Database operations for bills and bill items.
//!
//! ## Bill Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bill Lifecycle                                    │
//! │                                                                         │
//! │  1. CREATE (all-or-nothing)                                            │
//! │     └── create(payload) → Bill { id assigned by store }                │
//! │         header + every item insert in ONE transaction                  │
//! │                                                                         │
//! │  2. READ                                                               │
//! │     └── get_by_id(id) → Option<Bill> (items ordered)                   │
//! │     └── filter(filter) → Vec<Bill> (date windows, customer search)     │
//! │                                                                         │
//! │  3. AGGREGATE                                                          │
//! │     └── sum_total(filter) → Money (dashboard stats)                    │
//! │                                                                         │
//! │  4. RETENTION                                                          │
//! │     └── cleanup(retention_days) → deleted count                        │
//! │         (items cascade-delete with their bill)                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Local, NaiveDate};
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use saral_core::{Bill, BillItem, BillStatus, Money, NewBill, PaymentMode};

// =============================================================================
// Filter
// =============================================================================

/// Query parameters for listing bills.
///
/// All fields are optional; set fields combine with AND. Date-component
/// filters (`day`/`month`/`year`) and the range filter
/// (`start_date`/`end_date`) may be mixed freely.
///
/// ## Example
/// ```rust,ignore
/// // Every bill from August 2026
/// let filter = BillFilter {
///     month: Some(8),
///     year: Some(2026),
///     ..BillFilter::default()
/// };
/// let bills = db.bills().filter(&filter).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct BillFilter {
    /// Day of month (1-31).
    pub day: Option<u32>,
    /// Month (1-12).
    pub month: Option<u32>,
    /// Four-digit year.
    pub year: Option<i32>,
    /// Case-insensitive substring match on customer name.
    pub customer_name: Option<String>,
    /// Inclusive range start (from midnight).
    pub start_date: Option<NaiveDate>,
    /// Inclusive range end (through end of day).
    pub end_date: Option<NaiveDate>,
}

impl BillFilter {
    /// Filter matching a single calendar day.
    pub fn for_day(date: NaiveDate) -> Self {
        BillFilter {
            start_date: Some(date),
            end_date: Some(date),
            ..BillFilter::default()
        }
    }

    /// Filter matching one calendar month.
    pub fn for_month(year: i32, month: u32) -> Self {
        BillFilter {
            month: Some(month),
            year: Some(year),
            ..BillFilter::default()
        }
    }

    /// Filter matching one calendar year.
    pub fn for_year(year: i32) -> Self {
        BillFilter {
            year: Some(year),
            ..BillFilter::default()
        }
    }
}

/// Appends this filter's WHERE clauses to a query.
///
/// Dates are stored as "YYYY-MM-DD HH:MM:SS" TEXT, so component filters
/// go through strftime and range filters compare lexically.
fn push_filter_clauses(qb: &mut QueryBuilder<'_, Sqlite>, filter: &BillFilter) {
    if let Some(day) = filter.day {
        qb.push(" AND strftime('%d', date) = ")
            .push_bind(format!("{day:02}"));
    }
    if let Some(month) = filter.month {
        qb.push(" AND strftime('%m', date) = ")
            .push_bind(format!("{month:02}"));
    }
    if let Some(year) = filter.year {
        qb.push(" AND strftime('%Y', date) = ")
            .push_bind(format!("{year:04}"));
    }
    if let Some(name) = &filter.customer_name {
        qb.push(" AND customer_name LIKE ")
            .push_bind(format!("%{name}%"));
    }
    if let Some(start) = filter.start_date {
        qb.push(" AND date >= ")
            .push_bind(start.and_hms_opt(0, 0, 0).unwrap_or_default());
    }
    if let Some(end) = filter.end_date {
        qb.push(" AND date <= ")
            .push_bind(end.and_hms_opt(23, 59, 59).unwrap_or_default());
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for bill database operations.
#[derive(Debug, Clone)]
pub struct BillRepository {
    pool: SqlitePool,
}

impl BillRepository {
    /// Creates a new BillRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BillRepository { pool }
    }

    /// Saves a bill and all of its items atomically.
    ///
    /// ## All-or-Nothing
    /// The header and every line item insert inside one transaction; a
    /// failure on any item rolls the whole bill back, so a stored bill
    /// can never be missing lines.
    ///
    /// ## Returns
    /// The stored bill with its store-assigned id and item ids.
    pub async fn create(&self, payload: &NewBill) -> DbResult<Bill> {
        debug!(
            customer = %payload.customer_name,
            items = payload.items.len(),
            "Saving bill"
        );

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO bills (
                customer_name, customer_phone, date,
                total_amount_paise, discount_paise,
                status, payment_mode
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&payload.customer_name)
        .bind(&payload.customer_phone)
        .bind(payload.date)
        .bind(payload.total_amount.paise())
        .bind(payload.discount.paise())
        .bind(payload.status.as_str())
        .bind(payload.payment_mode.map(|m| m.as_str()))
        .execute(&mut *tx)
        .await?;

        let bill_id = result.last_insert_rowid();

        let mut items = Vec::with_capacity(payload.items.len());
        for item in &payload.items {
            let item_result = sqlx::query(
                r#"
                INSERT INTO bill_items (
                    bill_id, item_name,
                    price_paise, quantity, discount_paise, item_total_paise
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )
            .bind(bill_id)
            .bind(&item.item_name)
            .bind(item.price.paise())
            .bind(item.quantity)
            .bind(item.discount.paise())
            .bind(item.item_total.paise())
            .execute(&mut *tx)
            .await?;

            items.push(BillItem {
                id: item_result.last_insert_rowid(),
                bill_id,
                item_name: item.item_name.clone(),
                price: item.price,
                quantity: item.quantity,
                discount: item.discount,
                item_total: item.item_total,
            });
        }

        tx.commit().await?;

        debug!(id = bill_id, "Bill saved");

        Ok(Bill {
            id: bill_id,
            customer_name: payload.customer_name.clone(),
            customer_phone: payload.customer_phone.clone(),
            date: payload.date,
            total_amount: payload.total_amount,
            discount: payload.discount,
            status: payload.status,
            payment_mode: payload.payment_mode,
            items,
        })
    }

    /// Gets a bill by ID, with its items in insertion order.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Bill>> {
        let row = sqlx::query(
            r#"
            SELECT id, customer_name, customer_phone, date,
                   total_amount_paise, discount_paise, status, payment_mode
            FROM bills
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let items = self.get_items(id).await?;
        Ok(Some(decode_bill(&row, items)?))
    }

    /// Gets all items for a bill, in insertion order.
    pub async fn get_items(&self, bill_id: i64) -> DbResult<Vec<BillItem>> {
        let rows = sqlx::query(
            r#"
            SELECT id, bill_id, item_name,
                   price_paise, quantity, discount_paise, item_total_paise
            FROM bill_items
            WHERE bill_id = ?1
            ORDER BY id
            "#,
        )
        .bind(bill_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_bill_item).collect()
    }

    /// Lists bills matching a filter, newest first, items included.
    pub async fn filter(&self, filter: &BillFilter) -> DbResult<Vec<Bill>> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            "SELECT id, customer_name, customer_phone, date, \
             total_amount_paise, discount_paise, status, payment_mode \
             FROM bills WHERE 1=1",
        );
        push_filter_clauses(&mut qb, filter);
        qb.push(" ORDER BY date DESC, id DESC");

        let rows = qb.build().fetch_all(&self.pool).await?;

        let mut bills = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: i64 = row.try_get("id")?;
            let items = self.get_items(id).await?;
            bills.push(decode_bill(row, items)?);
        }

        Ok(bills)
    }

    /// Sums `total_amount` over bills matching a filter.
    ///
    /// Used by the dashboard stat queries; an empty match sums to zero.
    pub async fn sum_total(&self, filter: &BillFilter) -> DbResult<Money> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            "SELECT COALESCE(SUM(total_amount_paise), 0) AS total FROM bills WHERE 1=1",
        );
        push_filter_clauses(&mut qb, filter);

        let row = qb.build().fetch_one(&self.pool).await?;
        let paise: i64 = row.try_get("total")?;
        Ok(Money::from_paise(paise))
    }

    /// Counts all stored bills.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bills")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Deletes bills older than the retention window.
    ///
    /// ## Semantics
    /// The cutoff is `now - retention_days` in local wall-clock time;
    /// bills dated strictly before it are removed, and their items go
    /// with them via `ON DELETE CASCADE`. `retention_days = 0` puts the
    /// cutoff at now, which removes every stored bill.
    ///
    /// ## Returns
    /// The number of bills deleted.
    pub async fn cleanup(&self, retention_days: u32) -> DbResult<u64> {
        let cutoff = Local::now().naive_local() - chrono::Duration::days(retention_days as i64);

        debug!(retention_days, cutoff = %cutoff, "Running bill cleanup");

        let result = sqlx::query("DELETE FROM bills WHERE date < ?1")
            .bind(cutoff)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected();
        debug!(deleted, "Bill cleanup complete");
        Ok(deleted)
    }
}

// =============================================================================
// Row Decoding
// =============================================================================
// The runtime query API hands back untyped rows; status and payment_mode
// are TEXT columns re-validated against the core enums on the way out.

fn decode_bill(row: &SqliteRow, items: Vec<BillItem>) -> DbResult<Bill> {
    let id: i64 = row.try_get("id")?;

    let status: BillStatus = row
        .try_get::<String, _>("status")?
        .parse()
        .map_err(|reason: String| DbError::corrupt_row("Bill", id.to_string(), reason))?;

    let payment_mode: Option<PaymentMode> = row
        .try_get::<Option<String>, _>("payment_mode")?
        .map(|raw| raw.parse())
        .transpose()
        .map_err(|reason: String| DbError::corrupt_row("Bill", id.to_string(), reason))?;

    Ok(Bill {
        id,
        customer_name: row.try_get("customer_name")?,
        customer_phone: row.try_get("customer_phone")?,
        date: row.try_get("date")?,
        total_amount: Money::from_paise(row.try_get("total_amount_paise")?),
        discount: Money::from_paise(row.try_get("discount_paise")?),
        status,
        payment_mode,
        items,
    })
}

fn decode_bill_item(row: &SqliteRow) -> DbResult<BillItem> {
    Ok(BillItem {
        id: row.try_get("id")?,
        bill_id: row.try_get("bill_id")?,
        item_name: row.try_get("item_name")?,
        price: Money::from_paise(row.try_get("price_paise")?),
        quantity: row.try_get("quantity")?,
        discount: Money::from_paise(row.try_get("discount_paise")?),
        item_total: Money::from_paise(row.try_get("item_total_paise")?),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;
    use saral_core::NewBillItem;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn sample_payload(date: chrono::NaiveDateTime) -> NewBill {
        NewBill {
            customer_name: "Asha".to_string(),
            customer_phone: "9611961979".to_string(),
            date,
            total_amount: Money::from_paise(117000),
            discount: Money::from_paise(13000),
            status: BillStatus::Paid,
            payment_mode: Some(PaymentMode::Upi),
            items: vec![
                NewBillItem {
                    item_name: "Silk Saree".to_string(),
                    price: Money::from_paise(50000),
                    quantity: 2,
                    discount: Money::zero(),
                    item_total: Money::from_paise(100000),
                },
                NewBillItem {
                    item_name: "Cotton Blouse".to_string(),
                    price: Money::from_paise(30000),
                    quantity: 1,
                    discount: Money::zero(),
                    item_total: Money::from_paise(30000),
                },
            ],
        }
    }

    fn at(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_fetch_round_trip() {
        let db = test_db().await;
        let created = db.bills().create(&sample_payload(at(2026, 8, 29))).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.items.len(), 2);

        let fetched = db.bills().get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.customer_name, "Asha");
        assert_eq!(fetched.total_amount.paise(), 117000);
        assert_eq!(fetched.status, BillStatus::Paid);
        assert_eq!(fetched.payment_mode, Some(PaymentMode::Upi));
        assert_eq!(fetched.date, at(2026, 8, 29));
        assert_eq!(fetched.items.len(), 2);
        assert_eq!(fetched.items[0].item_name, "Silk Saree");
        assert_eq!(fetched.items[0].bill_id, created.id);
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let db = test_db().await;
        assert!(db.bills().get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unpaid_bill_has_no_payment_mode() {
        let db = test_db().await;
        let mut payload = sample_payload(at(2026, 8, 29));
        payload.status = BillStatus::Unpaid;
        payload.payment_mode = None;

        let created = db.bills().create(&payload).await.unwrap();
        let fetched = db.bills().get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, BillStatus::Unpaid);
        assert!(fetched.payment_mode.is_none());
    }

    #[tokio::test]
    async fn test_filter_by_month_and_year() {
        let db = test_db().await;
        db.bills().create(&sample_payload(at(2026, 8, 29))).await.unwrap();
        db.bills().create(&sample_payload(at(2026, 7, 15))).await.unwrap();
        db.bills().create(&sample_payload(at(2025, 8, 1))).await.unwrap();

        let august_2026 = db.bills().filter(&BillFilter::for_month(2026, 8)).await.unwrap();
        assert_eq!(august_2026.len(), 1);
        assert_eq!(august_2026[0].date, at(2026, 8, 29));

        let year_2026 = db.bills().filter(&BillFilter::for_year(2026)).await.unwrap();
        assert_eq!(year_2026.len(), 2);
    }

    #[tokio::test]
    async fn test_filter_newest_first_with_items() {
        let db = test_db().await;
        db.bills().create(&sample_payload(at(2026, 8, 1))).await.unwrap();
        db.bills().create(&sample_payload(at(2026, 8, 29))).await.unwrap();

        let bills = db.bills().filter(&BillFilter::default()).await.unwrap();
        assert_eq!(bills.len(), 2);
        assert_eq!(bills[0].date, at(2026, 8, 29));
        assert_eq!(bills[1].date, at(2026, 8, 1));
        assert_eq!(bills[0].items.len(), 2);
    }

    #[tokio::test]
    async fn test_filter_by_customer_name_substring() {
        let db = test_db().await;
        db.bills().create(&sample_payload(at(2026, 8, 29))).await.unwrap();

        let mut other = sample_payload(at(2026, 8, 29));
        other.customer_name = "Bina".to_string();
        db.bills().create(&other).await.unwrap();

        let filter = BillFilter {
            customer_name: Some("sh".to_string()),
            ..BillFilter::default()
        };
        let bills = db.bills().filter(&filter).await.unwrap();
        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].customer_name, "Asha");
    }

    #[tokio::test]
    async fn test_filter_date_range_inclusive() {
        let db = test_db().await;
        db.bills().create(&sample_payload(at(2026, 8, 1))).await.unwrap();
        db.bills().create(&sample_payload(at(2026, 8, 15))).await.unwrap();
        db.bills().create(&sample_payload(at(2026, 8, 29))).await.unwrap();

        let filter = BillFilter {
            start_date: NaiveDate::from_ymd_opt(2026, 8, 1),
            end_date: NaiveDate::from_ymd_opt(2026, 8, 15),
            ..BillFilter::default()
        };
        let bills = db.bills().filter(&filter).await.unwrap();
        // End date is inclusive through end of day
        assert_eq!(bills.len(), 2);
    }

    #[tokio::test]
    async fn test_sum_total() {
        let db = test_db().await;
        db.bills().create(&sample_payload(at(2026, 8, 1))).await.unwrap();
        db.bills().create(&sample_payload(at(2026, 8, 29))).await.unwrap();
        db.bills().create(&sample_payload(at(2025, 1, 1))).await.unwrap();

        let total = db.bills().sum_total(&BillFilter::for_year(2026)).await.unwrap();
        assert_eq!(total.paise(), 234000);

        // Empty window sums to zero
        let empty = db.bills().sum_total(&BillFilter::for_year(2020)).await.unwrap();
        assert!(empty.is_zero());
    }

    #[tokio::test]
    async fn test_cleanup_zero_retention_deletes_everything() {
        let db = test_db().await;
        db.bills().create(&sample_payload(at(2024, 1, 1))).await.unwrap();
        db.bills().create(&sample_payload(at(2025, 6, 15))).await.unwrap();

        let deleted = db.bills().cleanup(0).await.unwrap();
        assert_eq!(deleted, 2);
        assert_eq!(db.bills().count().await.unwrap(), 0);

        // Items cascade away with their bills
        let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bill_items")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[tokio::test]
    async fn test_assemble_store_invoice_round_trip() {
        use chrono::NaiveTime;
        use saral_core::assemble::assemble;
        use saral_core::draft::{BillDraft, DraftEvent};
        use saral_core::invoice::InvoiceView;
        use saral_core::DiscountKind;

        let draft = BillDraft::new(NaiveDate::from_ymd_opt(2026, 8, 29).unwrap())
            .apply(DraftEvent::CustomerName("Asha".to_string()))
            .apply(DraftEvent::CustomerPhone("9611961979".to_string()))
            .apply(DraftEvent::ItemName {
                index: 0,
                name: "Silk Saree".to_string(),
            })
            .apply(DraftEvent::ItemPrice {
                index: 0,
                raw: "500".to_string(),
            })
            .apply(DraftEvent::ItemQuantity {
                index: 0,
                raw: "2".to_string(),
            })
            .apply(DraftEvent::AddItem)
            .apply(DraftEvent::ItemName {
                index: 1,
                name: "Cotton Blouse".to_string(),
            })
            .apply(DraftEvent::ItemPrice {
                index: 1,
                raw: "300".to_string(),
            })
            .apply(DraftEvent::DiscountKind(DiscountKind::Percentage))
            .apply(DraftEvent::DiscountValue("10".to_string()));

        let payload = assemble(&draft, NaiveTime::from_hms_opt(14, 30, 5).unwrap());

        let db = test_db().await;
        let created = db.bills().create(&payload).await.unwrap();
        let stored = db.bills().get_by_id(created.id).await.unwrap().unwrap();

        // Storage round-trip reproduces the computed totals exactly
        assert_eq!(stored.total_amount.paise(), 117000);
        assert_eq!(stored.items[0].item_total.paise(), 100000);
        assert_eq!(stored.items[1].item_total.paise(), 30000);

        let view = InvoiceView::from_bill(&stored).unwrap();
        assert_eq!(view.gross_subtotal.paise(), 130000);
        assert_eq!(view.total_discount.paise(), 13000);
        assert_eq!(view.total_amount.paise(), 117000);
        assert_eq!(
            view.amount_in_words.as_deref(),
            Some("One Thousand One Hundred and Seventy")
        );
    }

    #[tokio::test]
    async fn test_cleanup_respects_retention_window() {
        let db = test_db().await;
        let old_date = Local::now().naive_local() - chrono::Duration::days(400);
        let recent_date = Local::now().naive_local() - chrono::Duration::days(5);

        db.bills().create(&sample_payload(old_date)).await.unwrap();
        db.bills().create(&sample_payload(recent_date)).await.unwrap();

        let deleted = db.bills().cleanup(30).await.unwrap();
        assert_eq!(deleted, 1);
        assert_eq!(db.bills().count().await.unwrap(), 1);
    }
}
