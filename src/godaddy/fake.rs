// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! In-memory [`RecordsApi`] used by unit tests.

use async_trait::async_trait;
use std::sync::Mutex;

use super::client::RecordsApi;
use super::types::{ProviderRecord, ProviderRecordType};
use crate::errors::ProviderError;

/// A zone held in memory that logs every call it receives.
#[derive(Default)]
pub struct FakeApi {
    records: Mutex<Vec<ProviderRecord>>,
    calls: Mutex<Vec<String>>,
    fail_on: Mutex<Option<&'static str>>,
}

impl FakeApi {
    pub fn with_records(records: Vec<ProviderRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Make every call of `operation` ("list", "add" or "delete") fail with HTTP 500.
    pub fn fail_on(&self, operation: &'static str) {
        *self.fail_on.lock().unwrap() = Some(operation);
    }

    pub fn records(&self) -> Vec<ProviderRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn enter(&self, operation: &'static str, zone: &str, detail: &str) -> Result<(), ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{operation} {detail}").trim_end().to_string());
        if *self.fail_on.lock().unwrap() == Some(operation) {
            return Err(ProviderError::HttpStatus {
                operation: operation.to_string(),
                zone: zone.to_string(),
                status: 500,
                body: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RecordsApi for FakeApi {
    async fn list_records(&self, zone: &str) -> Result<Vec<ProviderRecord>, ProviderError> {
        self.enter("list", zone, "")?;
        Ok(self.records())
    }

    async fn list_by_type(
        &self,
        zone: &str,
        record_type: ProviderRecordType,
    ) -> Result<Vec<ProviderRecord>, ProviderError> {
        self.enter("list", zone, record_type.as_token())?;
        Ok(self
            .records()
            .into_iter()
            .filter(|r| r.record_type == record_type)
            .collect())
    }

    async fn add_records(
        &self,
        zone: &str,
        records: &[ProviderRecord],
    ) -> Result<(), ProviderError> {
        for r in records {
            self.enter("add", zone, &format!("{} {} {} {}", r.name, r.record_type, r.data, r.ttl))?;
        }
        self.records.lock().unwrap().extend_from_slice(records);
        Ok(())
    }

    async fn delete_record(
        &self,
        zone: &str,
        record: &ProviderRecord,
    ) -> Result<(), ProviderError> {
        self.enter(
            "delete",
            zone,
            &format!("{} {} {}", record.name, record.record_type, record.data),
        )?;
        self.records.lock().unwrap().retain(|r| r != record);
        Ok(())
    }
}
