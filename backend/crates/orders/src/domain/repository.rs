//! Order repository port

use kernel::id::{OrderId, UserId};

use crate::domain::entity::order::Order;
use crate::error::OrderResult;

/// Storage port for orders.
///
/// Reads are owner-scoped at the port level: there is no way to fetch an
/// order without naming its owner, so an order belonging to someone else
/// is indistinguishable from one that does not exist.
#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    async fn insert(&self, order: &Order) -> OrderResult<()>;

    /// All orders owned by `user_id`, oldest first.
    async fn find_by_owner(&self, user_id: &UserId) -> OrderResult<Vec<Order>>;

    async fn find_by_id_for_owner(
        &self,
        order_id: &OrderId,
        user_id: &UserId,
    ) -> OrderResult<Option<Order>>;
}
