//! Service/model fixtures: a seeded user directory, an account
//! directory with a fixed product catalog, and derived orders.
use std::borrow::Cow;

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use tracing::{debug, instrument};

use crate::{
    cli::{AppContext, IdArgs, TokenArgs},
    core::{
        error::{FixtureError, FixtureResult},
        token,
    },
    infra::output,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct User
{
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl User
{
    pub fn new(
        id: u64,
        name: &str,
        email: &str,
    ) -> Self
    {
        Self { id, name: name.to_string(), email: email.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Order
{
    pub id: u64,
    pub order_number: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Product
{
    pub id: u64,
    pub name: String,
    pub price: f64,
}

/// Price per unit of user id when deriving an order total
const ORDER_UNIT_PRICE: f64 = 99.99;

/// Order ids sit this far above the user id
const ORDER_ID_OFFSET: u64 = 100;

/// Directory seeded with two users
#[derive(Debug, Clone)]
pub struct UserDirectory
{
    users: IndexMap<u64, User>,
}

impl Default for UserDirectory
{
    fn default() -> Self
    {
        let users = [User::new(1, "Alice", "alice@example.com"), User::new(2, "Bob", "bob@example.com")]
            .into_iter()
            .map(|u| (u.id, u))
            .collect();
        Self { users }
    }
}

impl UserDirectory
{
    pub fn new() -> Self
    {
        Self::default()
    }

    pub fn users(&self) -> impl Iterator<Item = &User>
    {
        self.users.values()
    }

    pub fn get_user_by_id(
        &self,
        id: u64,
    ) -> FixtureResult<&User>
    {
        self.users
            .get(&id)
            .ok_or_else(|| FixtureError::NotFound(format!("user not found with id: {id}")))
    }

    /// Order derived from the id alone; the user need not exist
    pub fn order_for_user(
        &self,
        user_id: u64,
    ) -> FixtureResult<Order>
    {
        let id = user_id
            .checked_add(ORDER_ID_OFFSET)
            .ok_or(FixtureError::Overflow("order_for_user"))?;

        Ok(Order {
            id,
            order_number: format!("ORD-{user_id}"),
            total: ORDER_UNIT_PRICE * user_id as f64,
        })
    }

    /// Lenient lookup: empty tokens yield `None`, malformed ones fail
    pub fn user_id_from_token(
        &self,
        token: &str,
    ) -> FixtureResult<Option<String>>
    {
        if token.is_empty()
        {
            return Ok(None);
        }
        if token.split('.').count() != 3
        {
            return Err(FixtureError::InvalidArgument("invalid JWT token format".to_string()));
        }
        token::user_id_claim(token)
    }
}

/// Directory that starts empty and owns the product catalog
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory
{
    users: IndexMap<u64, User>,
}

impl AccountDirectory
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Insert or replace a user, returning the previous entry
    pub fn insert(
        &mut self,
        user: User,
    ) -> Option<User>
    {
        self.users.insert(user.id, user)
    }

    pub fn get_user_by_id(
        &self,
        id: u64,
    ) -> FixtureResult<&User>
    {
        self.users
            .get(&id)
            .ok_or_else(|| FixtureError::NotFound(format!("no user found for id: {id}")))
    }

    /// Strict lookup: blank tokens fail, short ones yield `None`
    pub fn user_id_from_token(
        &self,
        token: &str,
    ) -> FixtureResult<Option<String>>
    {
        if token.trim().is_empty()
        {
            return Err(FixtureError::InvalidArgument("token cannot be empty".to_string()));
        }
        if token.split('.').count() < 2
        {
            return Ok(None);
        }
        token::user_id_claim(token)
    }

    pub fn products() -> Vec<Product>
    {
        [(1, "Laptop", 999.99), (2, "Mouse", 29.99), (3, "Keyboard", 79.99)]
            .into_iter()
            .map(|(id, name, price)| Product { id, name: name.to_string(), price })
            .collect()
    }

    pub fn get_product_by_id(
        &self,
        id: u64,
    ) -> FixtureResult<Product>
    {
        Self::products()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| FixtureError::NotFound(format!("product not found: {id}")))
    }
}

/// `fixtures user ID`
#[instrument(skip(ctx))]
pub fn run_user(
    args: IdArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let directory = UserDirectory::new();
    let user = directory.get_user_by_id(args.id)?;
    let text = format!("{} {} <{}>", user.id, user.name, user.email);
    output::print_record(ctx, user, &text)
}

/// `fixtures order USER_ID`
#[instrument(skip(ctx))]
pub fn run_order(
    args: IdArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let order = UserDirectory::new().order_for_user(args.id)?;
    let text = format!("{} {} {:.2}", order.id, order.order_number, order.total);
    output::print_record(ctx, &order, &text)
}

/// `fixtures product ID`
#[instrument(skip(ctx))]
pub fn run_product(
    args: IdArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let product = AccountDirectory::new().get_product_by_id(args.id)?;
    let text = format!("{} {} {:.2}", product.id, product.name, product.price);
    output::print_record(ctx, &product, &text)
}

#[derive(Debug, Serialize)]
struct TokenLookup
{
    user_id: Option<String>,
}

impl Tabled for TokenLookup
{
    const LENGTH: usize = 1;

    fn fields(&self) -> Vec<Cow<'_, str>>
    {
        vec![Cow::Owned(display_claim(&self.user_id))]
    }

    fn headers() -> Vec<Cow<'static, str>>
    {
        vec![Cow::Borrowed("user_id")]
    }
}

fn display_claim(claim: &Option<String>) -> String
{
    claim.clone().unwrap_or_else(|| "-".to_string())
}

/// `fixtures token TOKEN [--strict]`
#[instrument(skip(args, ctx))]
pub fn run_token(
    args: TokenArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let user_id = if args.strict
    {
        AccountDirectory::new().user_id_from_token(&args.token)?
    }
    else
    {
        UserDirectory::new().user_id_from_token(&args.token)?
    };
    debug!(strict = args.strict, found = user_id.is_some(), "token inspected");

    let text = display_claim(&user_id);
    output::print_record(ctx, &TokenLookup { user_id }, &text)
}
