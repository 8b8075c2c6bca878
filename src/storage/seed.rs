//! Static seed data
//!
//! The demo data set the store is populated with at startup: six customers,
//! thirteen invoices referencing them, one year of revenue and a single
//! demo user. Amounts are cents.

use crate::core::model::{Customer, Invoice, InvoiceStatus, Revenue, User};
use crate::core::money::Money;
use chrono::NaiveDate;

const EVIL_RABBIT: &str = "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa";
const DELBA: &str = "3958dc9e-712f-4377-85e9-fec4b6a6442a";
const LEE: &str = "3958dc9e-742f-4377-85e9-fec4b6a6442a";
const MICHAEL: &str = "76d65c26-f784-44a2-ac19-586678f7c2f2";
const AMY: &str = "cc27c14a-0acf-4f4a-a6c9-d45682c144b9";
const BALAZS: &str = "13d07535-c59e-4157-a011-f8d2ef4e0cbb";

pub fn customers() -> Vec<Customer> {
    let customer = |id: &str, name: &str, email: &str, image: &str| Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        image_url: format!("/customers/{}", image),
    };

    vec![
        customer(EVIL_RABBIT, "Evil Rabbit", "evil@rabbit.com", "evil-rabbit.png"),
        customer(DELBA, "Delba de Oliveira", "delba@oliveira.com", "delba-de-oliveira.png"),
        customer(LEE, "Lee Robinson", "lee@robinson.com", "lee-robinson.png"),
        customer(MICHAEL, "Michael Novotny", "michael@novotny.com", "michael-novotny.png"),
        customer(AMY, "Amy Burns", "amy@burns.com", "amy-burns.png"),
        customer(BALAZS, "Balazs Orban", "balazs@orban.com", "balazs-orban.png"),
    ]
}

pub fn invoices() -> Vec<Invoice> {
    let invoice = |customer_id: &str, cents: i64, status: InvoiceStatus, date: &str| Invoice {
        customer_id: customer_id.to_string(),
        amount: Money::from_cents(cents),
        status,
        date: date.parse::<NaiveDate>().expect("static seed date"),
    };

    use InvoiceStatus::{Paid, Pending};
    vec![
        invoice(EVIL_RABBIT, 15795, Pending, "2022-12-06"),
        invoice(DELBA, 20348, Pending, "2022-11-14"),
        invoice(AMY, 3040, Paid, "2022-10-29"),
        invoice(BALAZS, 44800, Paid, "2023-09-10"),
        invoice(LEE, 34577, Pending, "2023-08-05"),
        invoice(AMY, 54246, Pending, "2023-07-16"),
        invoice(EVIL_RABBIT, 666, Pending, "2023-06-27"),
        invoice(MICHAEL, 32545, Paid, "2023-06-09"),
        invoice(AMY, 1250, Paid, "2023-06-17"),
        invoice(BALAZS, 8546, Paid, "2023-06-07"),
        invoice(DELBA, 500, Paid, "2023-08-19"),
        invoice(BALAZS, 8945, Paid, "2023-06-03"),
        invoice(LEE, 1000, Paid, "2022-06-05"),
    ]
}

pub fn revenue() -> Vec<Revenue> {
    let month = |month: &str, revenue: i64| Revenue {
        month: month.to_string(),
        revenue,
    };

    vec![
        month("Jan", 2000),
        month("Feb", 1800),
        month("Mar", 2200),
        month("Apr", 2500),
        month("May", 2300),
        month("Jun", 3200),
        month("Jul", 3500),
        month("Aug", 3700),
        month("Sep", 2500),
        month("Oct", 2800),
        month("Nov", 3000),
        month("Dec", 4800),
    ]
}

pub fn users() -> Vec<User> {
    vec![User {
        id: "410544b2-4001-4271-9855-fec4b6a6442a".to_string(),
        name: "User".to_string(),
        email: "user@nextmail.com".to_string(),
        password: "123456".to_string(),
    }]
}
