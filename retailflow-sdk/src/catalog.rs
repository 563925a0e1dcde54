//! Static trigger and action catalog
//!
//! Apps are listed in display order. Lookups are by exact app name.

/// Trigger events offered per source app
pub const TRIGGER_OPTIONS: &[(&str, &[&str])] = &[
    (
        "Shopify",
        &[
            "New Order Created",
            "Product Updated",
            "Customer Account Created",
            "Order Cancelled",
            "Inventory Level Updated",
            "New Product Added",
            "Order Paid",
            "Shipment Status Updated",
            "New Blog Post",
            "Cart Abandoned",
            "New Collection Created",
            "Product Added to Collection",
            "Fulfillment Event Created",
            "New Payout",
            "Refund Created",
            "Tender Transaction Created",
        ],
    ),
    (
        "NetSuite",
        &[
            "Sales Order Created",
            "Inventory Updated",
            "Customer Modified",
            "New Invoice",
            "Item Record Created",
            "Purchase Order Received",
            "Vendor Bill Approved",
            "Employee Record Updated",
            "New Customer",
            "New Vendor",
            "Journal Entry Created",
            "Item Fulfillment Created",
            "Cash Sale Created",
            "Expense Report Approved",
            "Return Authorization Created",
            "Credit Memo Created",
        ],
    ),
    (
        "WooCommerce",
        &[
            "Order Placed",
            "Product Stock Changed",
            "Customer Registered",
            "New Coupon Created",
            "Order Status Changed",
            "Product Deleted",
            "New Product Review",
            "Subscription Created",
            "New Product Category",
            "Product Low in Stock",
            "Order Note Added",
            "Customer Updated",
            "Order Refunded",
            "Product Back in Stock",
            "New Downloadable Product",
            "Customer Login",
        ],
    ),
    (
        "Salesforce",
        &[
            "Lead Created",
            "Opportunity Created",
            "Contact Updated",
            "Account Updated",
            "Case Created",
            "Task Created",
            "Campaign Member Added",
            "New Platform Event",
            "Opportunity Stage Changed",
            "Case Comment Added",
            "New Attachment",
            "Updated Record",
            "New Event",
            "Deleted Record",
            "New Outbound Message",
            "Login Event",
        ],
    ),
    (
        "Sage X3",
        &[
            "New Sales Order",
            "Stock Movement",
            "New Customer Created",
            "Supplier Invoice Created",
            "New Purchase Order",
            "Delivery Record Created",
            "Work Order Completed",
            "Payment Received",
            "New Product Record",
            "Credit Memo Issued",
            "New Supplier Created",
            "Bill of Materials Updated",
            "New GL Journal Entry",
            "Shipment Validated",
            "Customer Record Updated",
            "Manufacturing Order Started",
        ],
    ),
    (
        "HubSpot",
        &[
            "New Contact Added to List",
            "Contact Property Changed",
            "New Deal Created",
            "Deal Stage Changed",
            "New Company Created",
            "Form Submission",
            "Email Link Clicked",
            "Marketing Email Opened",
            "New Ticket Created",
            "Contact Unsubscribed",
            "New Blog Post Published",
            "Call Completed",
            "Meeting Booked",
            "Task Completed",
            "New Quote Issued",
            "Conversation Started",
        ],
    ),
    (
        "Adobe Commerce",
        &[
            "New Order",
            "Product Created",
            "Customer Registered",
            "Invoice Paid",
            "Shipment Created",
            "Credit Memo Issued",
            "New Review Submitted",
            "Product Price Updated",
            "Cart Abandoned",
            "Customer Group Changed",
            "New Search Term",
            "Catalog Rule Applied",
            "Product Attribute Updated",
            "Inventory Source Changed",
            "Order Status Updated",
            "Customer Logged In",
        ],
    ),
    (
        "Magento",
        &[
            "New Order",
            "New Customer",
            "Product Created",
            "Inventory Changed",
            "Order Status Updated",
            "New Invoice",
            "Shipment Created",
            "Credit Memo Created",
            "Customer Logged In",
            "Cart Abandoned",
            "New Review Submitted",
            "Product Deleted",
            "Category Created",
            "Customer Address Updated",
            "Order Comment Added",
            "New Search Term",
        ],
    ),
    (
        "QuickBooks",
        &[
            "New Invoice",
            "Invoice Paid",
            "New Customer",
            "New Vendor",
            "New Bill",
            "Bill Paid",
            "New Sales Receipt",
            "New Estimate",
            "Estimate Accepted",
            "New Purchase Order",
            "New Expense",
            "Payment Received",
            "Customer Updated",
            "Item Created",
            "New Credit Memo",
            "Time Activity Created",
        ],
    ),
    (
        "Slack",
        &[
            "New Message in Channel",
            "Keyword Mentioned",
            "User Joins Channel",
            "New File Uploaded",
            "Reaction Added",
            "New Private Message",
            "New Channel Created",
            "User Profile Changed",
            "App Mentioned",
            "Message Pinned",
            "User Leaves Channel",
            "New Slash Command",
            "Channel Archived",
            "Reminder Triggered",
            "User Status Changed",
            "File Shared Publicly",
        ],
    ),
    (
        "SendGrid",
        &[
            "Email Opened",
            "Link Clicked",
            "Email Delivered",
            "Email Bounced",
            "Recipient Unsubscribed",
            "Marked as Spam",
            "New Contact Added to List",
            "Email Processed",
            "Email Dropped",
            "Subscription Activated",
            "Contact List Created",
            "Template Version Activated",
            "Sender Identity Verified",
            "Email Deferred",
            "Group Unsubscribed",
            "Contact Property Changed",
        ],
    ),
];

/// Actions offered per target app
pub const ACTION_OPTIONS: &[(&str, &[&str])] = &[
    (
        "Shopify",
        &[
            "Create Customer",
            "Update Customer",
            "Create Order",
            "Update Order",
            "Create Product",
            "Update Inventory Level",
            "Fulfill Order",
            "Create Discount Code",
            "Add Tag to Customer",
            "Cancel Order",
        ],
    ),
    (
        "WooCommerce",
        &[
            "Create Customer",
            "Update Order Status",
            "Create Product",
            "Update Product Stock",
            "Create Coupon",
            "Process Refund",
            "Add Note to Order",
            "Update Product",
            "Delete Customer",
            "Add Product Tag",
        ],
    ),
    (
        "NetSuite",
        &[
            "Create Sales Order",
            "Update Inventory Item",
            "Add Customer",
            "Create Invoice",
            "Find and Update Sales Order",
            "Item Record",
            "Create Purchase Order",
            "Fulfill Sales Order",
            "Accept Customer Payment",
        ],
    ),
    (
        "Salesforce",
        &[
            "Create Lead",
            "Update Contact",
            "Create Opportunity",
            "Send Email",
            "Create Account",
            "Create Task",
            "Add Note to Record",
            "Convert Lead",
            "Create Case",
        ],
    ),
    (
        "Magento",
        &[
            "Update Product",
            "Create Customer",
            "Process Order",
            "Update Inventory",
            "Create Invoice",
            "Create Shipment",
            "Add Comment to Order",
            "Cancel Order",
            "Add Product to Category",
        ],
    ),
    (
        "QuickBooks",
        &[
            "Create Invoice",
            "Add Customer",
            "Record Payment",
            "Update Item",
            "Create Bill",
            "Create Estimate",
            "Add Vendor",
            "Create Sales Receipt",
            "Create Purchase Order",
        ],
    ),
    (
        "Slack",
        &[
            "Send Channel Message",
            "Send Direct Message",
            "Create Channel",
            "Invite User To Channel",
            "Set Channel Topic",
            "Pin Message to Channel",
            "Update User Profile",
            "Add Reminder",
            "Upload File",
        ],
    ),
    (
        "SendGrid",
        &[
            "Send Email",
            "Add or Update Contact in a list",
            "Unsubscribe User",
            "Create List",
            "Delete List",
            "Remove Contact from List",
            "Send Templated Email",
            "Add Contact to Suppression List",
            "Get Email Statistics",
        ],
    ),
    (
        "Sage X3",
        &[
            "Create Sales Quote",
            "Update Stock Level",
            "Add Supplier",
            "Generate Customer Invoice",
            "Create Purchase Order",
            "Receive Stock",
            "Create Customer",
            "Update Customer Credit Limit",
            "Create Sales Order",
            "Process Shipment",
        ],
    ),
    (
        "HubSpot",
        &[
            "Create Contact",
            "Update Deal Stage",
            "Add Contact to Workflow",
            "Log a Call",
            "Send Marketing Email",
            "Create Company",
            "Update Contact Property",
            "Create Ticket",
            "Add Note to Contact",
            "Create Deal",
        ],
    ),
    (
        "Adobe Commerce",
        &[
            "Create Product",
            "Update Order Status",
            "Add Customer to Group",
            "Manage Inventory",
            "Create Invoice for Order",
            "Add Comment to Order",
            "Create Shipment",
            "Cancel Order",
            "Update Product Price",
            "Add Product to Category",
        ],
    ),
];

pub fn trigger_apps() -> impl Iterator<Item = &'static str> {
    TRIGGER_OPTIONS.iter().map(|(app, _)| *app)
}

pub fn trigger_events(app: &str) -> Option<&'static [&'static str]> {
    lookup(TRIGGER_OPTIONS, app)
}

pub fn action_apps() -> impl Iterator<Item = &'static str> {
    ACTION_OPTIONS.iter().map(|(app, _)| *app)
}

pub fn app_actions(app: &str) -> Option<&'static [&'static str]> {
    lookup(ACTION_OPTIONS, app)
}

fn lookup(
    table: &'static [(&'static str, &'static [&'static str])],
    app: &str,
) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(name, _)| *name == app)
        .map(|(_, options)| *options)
}
