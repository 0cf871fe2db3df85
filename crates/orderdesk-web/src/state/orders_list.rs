//! Loaded page of orders and fetch bookkeeping

use orderdesk_core::{Order, OrdersPage, PageQuery};

/// Identifies one list fetch
///
/// Only the ticket with the latest generation may change the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    /// Generation number of the fetch
    pub generation: u64,
    /// Page requested
    pub query: PageQuery,
}

/// What applying a fetch result did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Rows and pagination were replaced
    Applied,
    /// A newer fetch was started meanwhile; nothing changed
    Stale,
    /// The page no longer exists; the list moved and this fetch must run next
    Relocated(FetchTicket),
}

/// Rows and pagination metadata of the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersList {
    per_page: u32,
    current_page: u32,
    orders: Vec<Order>,
    total: u64,
    total_pages: u32,
    loading: bool,
    generation: u64,
}

impl OrdersList {
    /// Create an empty list on page 1
    pub fn new(per_page: u32) -> Self {
        Self {
            per_page: per_page.max(1),
            current_page: 1,
            orders: Vec::new(),
            total: 0,
            total_pages: 1,
            loading: false,
            generation: 0,
        }
    }

    /// Start a fetch of the current page
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            query: PageQuery::new(self.current_page, self.per_page),
        }
    }

    /// Move to `page` and start fetching it
    ///
    /// Returns `None` when `page` is out of range or already current.
    pub fn go_to_page(&mut self, page: u32) -> Option<FetchTicket> {
        if page < 1 || page > self.total_pages || page == self.current_page {
            return None;
        }
        self.current_page = page;
        Some(self.begin_fetch())
    }

    /// Apply a successful fetch
    pub fn apply(&mut self, ticket: FetchTicket, page: OrdersPage) -> FetchOutcome {
        if !self.is_latest(ticket) {
            return FetchOutcome::Stale;
        }

        let total_pages = page.effective_total_pages();
        self.total = page.total;
        self.total_pages = total_pages;

        if page.items.is_empty() && ticket.query.page > total_pages {
            self.current_page = total_pages;
            return FetchOutcome::Relocated(self.begin_fetch());
        }

        self.orders = page.items;
        self.loading = false;
        FetchOutcome::Applied
    }

    /// Record a failed fetch; rows are kept
    ///
    /// Returns whether the failure belonged to the latest fetch.
    pub fn fail(&mut self, ticket: FetchTicket) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.loading = false;
        true
    }

    const fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Rows of the current page
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Ids of the rows of the current page
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.orders.iter().map(|order| order.id.as_str())
    }

    /// Whether `id` is on the current page
    pub fn contains(&self, id: &str) -> bool {
        self.ids().any(|loaded| loaded == id)
    }

    /// Current page (1-based)
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Number of pages, at least 1
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Number of orders in the collection
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Rows per page
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Whether the latest fetch is still running
    pub const fn is_loading(&self) -> bool {
        self.loading
    }
}
