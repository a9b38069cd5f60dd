//
//  watson-assistant
//  api/v1/user_data.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Deleting labeled data.
//!
//! Data is labeled with a customer ID by sending the `X-Watson-Metadata`
//! header (`customer_id=...`) on the requests that create it.

use std::collections::HashMap;

use reqwest::Method;

use crate::api::common::{require, DetailedResponse, Result};
use crate::api::AssistantV1;

/// Options for [`AssistantV1::delete_user_data`].
#[derive(Debug, Clone, Default)]
pub struct DeleteUserDataOptions {
    /// The customer ID the data was labeled with.
    pub customer_id: String,
    /// Extra headers for this call.
    pub headers: HashMap<String, String>,
}

impl DeleteUserDataOptions {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            ..Default::default()
        }
    }
}

impl AssistantV1 {
    /// Deletes all data associated with a customer ID.
    ///
    /// `DELETE /v1/user_data?customer_id=...`
    ///
    /// The service accepts the request and deletes the data asynchronously.
    pub async fn delete_user_data(
        &self,
        options: &DeleteUserDataOptions,
    ) -> Result<DetailedResponse<()>> {
        require("customer_id", &options.customer_id)?;

        let builder = self
            .request(Method::DELETE, "/v1/user_data", &[])?
            .with_query("customer_id", &options.customer_id)
            .with_headers(&options.headers)?;

        self.send_empty(builder).await
    }
}
