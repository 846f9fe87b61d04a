//! Carts service.
//!
//! Read-merge-write operations over cart records. Sequences here are plain
//! get/put with no store-side lock; two concurrent writers to the same key
//! race last-writer-wins on the whole list. Callers that need strict
//! correctness must serialize their own requests per cart key.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        keys::{AnonKey, CartKey},
        models::CartLine,
        repository::CartsRepository,
    },
    sessions::models::UserId,
};

/// Cart operations exposed to the HTTP surface.
#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Current lines of the cart stored under `key`.
    async fn get_items(&self, key: &CartKey) -> Result<Vec<CartLine>, CartsServiceError>;

    /// Add `qty` of a product, summing with any existing line for the same
    /// product. Returns the updated cart.
    async fn add_item(
        &self,
        key: &CartKey,
        product_id: &str,
        qty: u32,
    ) -> Result<Vec<CartLine>, CartsServiceError>;

    /// Drop the line for `product_id`, if present. Returns the updated cart.
    async fn remove_item(
        &self,
        key: &CartKey,
        product_id: &str,
    ) -> Result<Vec<CartLine>, CartsServiceError>;

    /// Delete the cart record. Returns the (empty) cart.
    async fn clear(&self, key: &CartKey) -> Result<Vec<CartLine>, CartsServiceError>;

    /// Fold the guest cart into the user's cart and retire the guest record.
    ///
    /// Quantities for a product present in both carts are summed, not
    /// replaced. Once the guest record is gone a repeat call is a no-op on
    /// the user cart.
    async fn merge_guest_cart(
        &self,
        anon: &AnonKey,
        user: &UserId,
    ) -> Result<Vec<CartLine>, CartsServiceError>;
}

/// [`CartsService`] over a [`CartsRepository`].
pub struct RedisCartsService {
    repository: Arc<dyn CartsRepository>,
}

impl RedisCartsService {
    #[must_use]
    pub fn new(repository: Arc<dyn CartsRepository>) -> Self {
        Self { repository }
    }
}

impl std::fmt::Debug for RedisCartsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCartsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl CartsService for RedisCartsService {
    async fn get_items(&self, key: &CartKey) -> Result<Vec<CartLine>, CartsServiceError> {
        Ok(self.repository.get(key).await?)
    }

    async fn add_item(
        &self,
        key: &CartKey,
        product_id: &str,
        qty: u32,
    ) -> Result<Vec<CartLine>, CartsServiceError> {
        if product_id.is_empty() {
            return Err(CartsServiceError::MissingProductId);
        }

        if qty == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut lines = self.repository.get(key).await?;

        match lines.iter_mut().find(|line| line.product_id == product_id) {
            Some(line) => line.qty = line.qty.saturating_add(qty),
            None => lines.push(CartLine::new(product_id, qty)),
        }

        self.repository.put(key, &lines).await?;

        Ok(lines)
    }

    async fn remove_item(
        &self,
        key: &CartKey,
        product_id: &str,
    ) -> Result<Vec<CartLine>, CartsServiceError> {
        let mut lines = self.repository.get(key).await?;

        lines.retain(|line| line.product_id != product_id);

        self.repository.put(key, &lines).await?;

        Ok(lines)
    }

    async fn clear(&self, key: &CartKey) -> Result<Vec<CartLine>, CartsServiceError> {
        self.repository.delete(key).await?;

        Ok(Vec::new())
    }

    async fn merge_guest_cart(
        &self,
        anon: &AnonKey,
        user: &UserId,
    ) -> Result<Vec<CartLine>, CartsServiceError> {
        let guest_key = CartKey::Anonymous(anon.clone());
        let user_key = CartKey::User(user.clone());

        // No ordering dependency between the two reads.
        let (user_lines, guest_lines) = tokio::try_join!(
            self.repository.get(&user_key),
            self.repository.get(&guest_key),
        )?;

        let merged = merge_lines(user_lines, guest_lines);

        // Sequential, independent writes: a crash in between leaves a stale
        // guest record behind rather than losing the merged cart.
        self.repository.put(&user_key, &merged).await?;
        self.repository.delete(&guest_key).await?;

        Ok(merged)
    }
}

/// Sum quantities per product, folding user lines first, then guest lines.
fn merge_lines(user: Vec<CartLine>, guest: Vec<CartLine>) -> Vec<CartLine> {
    let mut merged: Vec<CartLine> = Vec::with_capacity(user.len() + guest.len());

    for line in user.into_iter().chain(guest) {
        if line.qty == 0 {
            continue;
        }

        match merged
            .iter_mut()
            .find(|existing| existing.product_id == line.product_id)
        {
            Some(existing) => existing.qty = existing.qty.saturating_add(line.qty),
            None => merged.push(line),
        }
    }

    merged
}
