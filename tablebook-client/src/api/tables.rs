use reqwest::Method;
use serde_json::Value;
use shared::{DiningTable, TableDraft};
use tokio_util::sync::CancellationToken;

use super::SeatPayload;
use crate::http::is_cancelled;
use crate::{ClientResult, Gateway, RequestOptions};

impl Gateway {
    /// `GET /tables`
    pub async fn list_tables(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<Vec<DiningTable>> {
        let list: Option<Vec<DiningTable>> = self
            .request("tables", RequestOptions::get(), cancel, Some(Vec::new()))
            .await?;
        Ok(list.unwrap_or_default())
    }

    /// `POST /tables`
    pub async fn create_table(
        &self,
        table: &TableDraft,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<Option<DiningTable>> {
        let options = RequestOptions::with_data(Method::POST, table)?;
        let created: Option<DiningTable> = self.request("tables", options, cancel, None).await?;
        if let Some(t) = &created {
            tracing::info!(table_id = t.table_id, table_name = %t.table_name, "Table created");
        }
        Ok(created)
    }

    /// `PUT /tables/{table_id}/seat`
    ///
    /// The backend marks the reservation seated in the same step.
    pub async fn seat_reservation(
        &self,
        table_id: i64,
        reservation_id: i64,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<()> {
        let options = RequestOptions::with_data(Method::PUT, &SeatPayload { reservation_id })?;
        self.request::<Value>(&format!("tables/{table_id}/seat"), options, cancel, None)
            .await?;
        if !is_cancelled(cancel) {
            tracing::info!(table_id, reservation_id, "Reservation seated");
        }
        Ok(())
    }

    /// `DELETE /tables/{table_id}/seat`
    ///
    /// Frees the table; the backend marks its reservation finished.
    pub async fn release_table(
        &self,
        table_id: i64,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<()> {
        self.request::<Value>(
            &format!("tables/{table_id}/seat"),
            RequestOptions::delete(),
            cancel,
            None,
        )
        .await?;
        if !is_cancelled(cancel) {
            tracing::info!(table_id, "Table released");
        }
        Ok(())
    }
}
