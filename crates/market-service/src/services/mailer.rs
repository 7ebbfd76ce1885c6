//! Outbound email - invoice and delivery-confirmation messages
//!
//! Sends are best-effort: every call site logs failures and continues, and
//! each send is bounded by a 30-second timeout. When SMTP is not configured
//! the mailer stays disabled and sends become logged no-ops.

use std::time::Duration;

use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use market_common::SmtpConfig;
use market_core::entities::{Order, OrderItemDetail, User};
use thiserror::Error;
use tracing::{info, warn};

/// Upper bound on a single SMTP send
const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Mailer errors. These never propagate past the call sites that trigger
/// sends; status changes and order creation stand regardless.
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),

    #[error("Email send timed out after {}s", SEND_TIMEOUT.as_secs())]
    Timeout,
}

/// Outbound mailer over async SMTP
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: Option<Mailbox>,
    from_name: String,
}

impl Mailer {
    /// Build the mailer from configuration. Misconfiguration downgrades to a
    /// disabled mailer with a warning rather than failing startup.
    pub fn new(config: &SmtpConfig) -> Self {
        let mut mailer = Self {
            transport: None,
            from: None,
            from_name: config.from_name.clone(),
        };

        if !config.is_configured() {
            warn!("SMTP not configured; order emails are disabled");
            return mailer;
        }

        let host = config.host.as_deref().unwrap_or_default();
        let from_address = config.from_address.as_deref().unwrap_or_default();

        let from = match format!("{} <{}>", config.from_name, from_address).parse::<Mailbox>() {
            Ok(from) => from,
            Err(e) => {
                warn!(error = %e, "Invalid SMTP from address; order emails are disabled");
                return mailer;
            }
        };

        let builder = if config.tls {
            match AsyncSmtpTransport::<Tokio1Executor>::relay(host) {
                Ok(builder) => builder,
                Err(e) => {
                    warn!(error = %e, "Failed to build SMTP transport; order emails are disabled");
                    return mailer;
                }
            }
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
        }
        .port(config.port);

        let builder = if let (Some(username), Some(password)) = (&config.username, &config.password)
        {
            builder.credentials(Credentials::new(username.clone(), password.clone()))
        } else {
            builder
        };

        mailer.from = Some(from);
        mailer.transport = Some(builder.build());
        mailer
    }

    /// Whether sends will actually reach an SMTP server
    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }

    /// Send the order invoice after checkout
    pub async fn send_invoice(
        &self,
        order: &Order,
        user: &User,
        items: &[OrderItemDetail],
    ) -> Result<(), MailerError> {
        let subject = format!("Order Invoice #{} - Status: {}", order.id, order.status);
        let html = render_invoice_html(order, user, items, &self.from_name);
        let text = render_invoice_text(order, user, items, &self.from_name);
        self.send(&user.email, &subject, &html, &text).await
    }

    /// Send the delivery confirmation when an order reaches `delivered`
    pub async fn send_delivery_confirmation(
        &self,
        order: &Order,
        user: &User,
        _items: &[OrderItemDetail],
    ) -> Result<(), MailerError> {
        let subject = format!("Order #{} Has Been Delivered", order.id);
        let html = render_delivery_html(order, user, &self.from_name);
        let text = render_delivery_text(order, user, &self.from_name);
        self.send(&user.email, &subject, &html, &text).await
    }

    /// Send an email with HTML and plain text versions
    async fn send(
        &self,
        to_email: &str,
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Result<(), MailerError> {
        let (Some(transport), Some(from)) = (&self.transport, &self.from) else {
            warn!(to = %to_email, subject = %subject, "Email not configured, skipping send");
            return Ok(());
        };

        let to: Mailbox = to_email
            .parse()
            .map_err(|_| MailerError::InvalidAddress(to_email.to_string()))?;

        let email = Message::builder()
            .from(from.clone())
            .to(to)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )
            .map_err(|e| MailerError::Build(e.to_string()))?;

        match tokio::time::timeout(SEND_TIMEOUT, transport.send(email)).await {
            Ok(Ok(_)) => {
                info!(to = %to_email, subject = %subject, "Email sent successfully");
                Ok(())
            }
            Ok(Err(e)) => Err(MailerError::Transport(e.to_string())),
            Err(_) => Err(MailerError::Timeout),
        }
    }
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

fn render_item_rows_html(items: &[OrderItemDetail]) -> String {
    items
        .iter()
        .map(|detail| {
            format!(
                r#"<div class="item">
  <p><strong>{}</strong></p>
  <p>Quantity: {} &times; ${} = ${}</p>
</div>"#,
                html_escape(&detail.product_name),
                detail.item.quantity,
                detail.item.price,
                detail.item.line_total(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_invoice_html(
    order: &Order,
    user: &User,
    items: &[OrderItemDetail],
    shop_name: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background-color: #f4a261; color: white; padding: 20px; text-align: center; }}
    .content {{ padding: 20px; background-color: #f9f9f9; }}
    .order-info {{ background-color: white; padding: 15px; margin: 15px 0; border-radius: 5px; }}
    .item {{ padding: 10px; border-bottom: 1px solid #eee; }}
    .total {{ font-size: 18px; font-weight: bold; margin-top: 15px; padding-top: 15px; border-top: 2px solid #333; }}
    .footer {{ text-align: center; padding: 20px; color: #666; font-size: 12px; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>{shop_name}</h1>
      <h2>Order Invoice #{order_id}</h2>
    </div>
    <div class="content">
      <p>Dear {username},</p>
      <p>Thank you for your order! Your order has been confirmed.</p>
      <div class="order-info">
        <h3>Order Details</h3>
        <p><strong>Order ID:</strong> #{order_id}</p>
        <p><strong>Status:</strong> {status}</p>
        <p><strong>Payment Method:</strong> Cash on Delivery</p>
      </div>
      <div class="order-info">
        <h3>Shipping Address</h3>
        <p>{shipping_address}</p>
      </div>
      <div class="order-info">
        <h3>Order Items</h3>
        {item_rows}
        <div class="item">
          <p><strong>Subtotal:</strong> ${subtotal}</p>
          <p><strong>Shipping:</strong> ${shipping}</p>
        </div>
        <div class="total">
          <p>Total: ${total}</p>
        </div>
      </div>
      <p>You will receive your order soon. Payment will be collected upon delivery.</p>
      <p>Thank you for shopping with {shop_name}!</p>
    </div>
    <div class="footer">
      <p>{shop_name}</p>
      <p>This is an automated email. Please do not reply.</p>
    </div>
  </div>
</body>
</html>"#,
        shop_name = html_escape(shop_name),
        order_id = order.id,
        username = html_escape(&user.username),
        status = order.status,
        shipping_address = html_escape(&order.shipping_address),
        item_rows = render_item_rows_html(items),
        subtotal = order.total_amount,
        shipping = order.shipping_cost,
        total = order.grand_total(),
    )
}

fn render_invoice_text(
    order: &Order,
    user: &User,
    items: &[OrderItemDetail],
    shop_name: &str,
) -> String {
    let item_lines = items
        .iter()
        .map(|detail| {
            format!(
                "- {} x{} @ ${} = ${}",
                detail.product_name,
                detail.item.quantity,
                detail.item.price,
                detail.item.line_total(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r"Order Invoice #{order_id}

Dear {username},

Thank you for your order! Your order has been confirmed.

Status: {status}
Payment Method: Cash on Delivery

Shipping Address:
{shipping_address}

Order Items:
{item_lines}

Subtotal: ${subtotal}
Shipping: ${shipping}
Total: ${total}

You will receive your order soon. Payment will be collected upon delivery.

Thank you for shopping with {shop_name}!
This is an automated email. Please do not reply.",
        order_id = order.id,
        username = user.username,
        status = order.status,
        shipping_address = order.shipping_address,
        item_lines = item_lines,
        subtotal = order.total_amount,
        shipping = order.shipping_cost,
        total = order.grand_total(),
    )
}

fn render_delivery_html(order: &Order, user: &User, shop_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background-color: #2a9d8f; color: white; padding: 20px; text-align: center; }}
    .content {{ padding: 20px; background-color: #f9f9f9; }}
    .order-info {{ background-color: white; padding: 15px; margin: 15px 0; border-radius: 5px; }}
    .footer {{ text-align: center; padding: 20px; color: #666; font-size: 12px; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>{shop_name}</h1>
      <h2>Order Delivered</h2>
    </div>
    <div class="content">
      <p>Dear {username},</p>
      <p><strong>Your order has been delivered!</strong></p>
      <div class="order-info">
        <h3>Order #{order_id}</h3>
        <p><strong>Total Amount:</strong> ${total}</p>
      </div>
      <p>We hope you enjoy your purchase! Thank you for shopping with {shop_name}.</p>
    </div>
    <div class="footer">
      <p>{shop_name}</p>
      <p>This is an automated email. Please do not reply.</p>
    </div>
  </div>
</body>
</html>"#,
        shop_name = html_escape(shop_name),
        username = html_escape(&user.username),
        order_id = order.id,
        total = order.grand_total(),
    )
}

fn render_delivery_text(order: &Order, user: &User, shop_name: &str) -> String {
    format!(
        r"Order #{order_id} Has Been Delivered

Dear {username},

Your order has been delivered!

Total Amount: ${total}

We hope you enjoy your purchase! Thank you for shopping with {shop_name}.
This is an automated email. Please do not reply.",
        order_id = order.id,
        username = user.username,
        total = order.grand_total(),
    )
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
