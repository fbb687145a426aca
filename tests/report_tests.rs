mod common;

use common::{capture_logs, days_ago, dotted, fixed_clock, today};
use limit_tracker::{
    currency::{CurrencyEntry, CurrencyTable},
    CaloriesCalculator, CashCalculator, Locale, Record, Tracker,
};

#[test]
fn calories_scenario_reports_remaining_amount() {
    let clock = fixed_clock();
    let mut calories = CaloriesCalculator::with_clock(2000, clock.clone());
    calories.add_record(Record::with_clock(500, "pasta", dotted(today()), &*clock));

    assert_eq!(calories.get_today_stats(), 500);
    let message = calories.get_calories_remained();
    assert!(message.contains("1500"), "unexpected message: {message}");
}

#[test]
fn calories_over_limit_says_stop() {
    let mut calories = CaloriesCalculator::with_clock(1000, fixed_clock());
    calories.calculator_mut().record(1000, "feast", None::<&str>);
    assert_eq!(calories.get_calories_remained(), "Хватит есть!");
}

#[test]
fn cash_zero_balance_holds_on() {
    let mut cash = CashCalculator::with_clock(1000, fixed_clock());
    cash.calculator_mut().record(1000, "rent share", None::<&str>);
    assert_eq!(cash.get_today_cash_remained("rub"), "Денег нет, держись");
    assert_eq!(cash.get_today_cash_remained("usd"), "Денег нет, держись");
}

#[test]
fn cash_positive_balance_in_usd() {
    let cash = CashCalculator::with_clock(1000, fixed_clock());
    assert_eq!(cash.get_today_stats(), 0);
    assert_eq!(
        cash.get_today_cash_remained("usd"),
        "На сегодня осталось 16.67 USD"
    );
    assert_eq!(
        cash.get_today_cash_remained("USD"),
        "На сегодня осталось 16.67 USD"
    );
}

#[test]
fn cash_debt_uses_absolute_value() {
    let mut cash = CashCalculator::with_clock(100, fixed_clock());
    cash.calculator_mut().record(240, "dinner", None::<&str>);
    cash.calculator_mut().record(5_000, "last week", dotted(days_ago(3)));
    assert_eq!(
        cash.get_today_cash_remained("eur"),
        "Денег нет, держись: твой долг - 2.00 Euro"
    );
    assert_eq!(cash.get_week_stats(), 5_240);
}

#[test]
fn unknown_currency_falls_back_to_rub_and_warns() {
    let cash = CashCalculator::with_clock(1000, fixed_clock());
    let (message, logs) = capture_logs(|| cash.get_today_cash_remained("xyz"));
    assert_eq!(message, "На сегодня осталось 1000.00 руб");
    assert!(logs.contains("WARN"), "logs: {logs}");
    assert!(
        logs.contains("Валюта задана некорректна. Утановлена валюта руб"),
        "logs: {logs}"
    );
}

#[test]
fn invalid_limit_is_logged_in_the_calculator_locale() {
    let (calories, logs) =
        capture_logs(|| CaloriesCalculator::with_options(-10, fixed_clock(), Locale::En));
    assert_eq!(calories.limit(), 0);
    assert!(logs.contains("Invalid limit value. Using limit = 0"), "logs: {logs}");
    assert_eq!(calories.get_calories_remained(), "Stop eating!");
}

#[test]
fn english_locale_formats_cash() {
    let cash = CashCalculator::with_options(700, fixed_clock(), Locale::En);
    assert_eq!(cash.get_today_cash_remained("eur"), "Left for today: 10.00 Euro");
    assert_eq!(cash.get_today_cash_remained("rub"), "Left for today: 700.00 RUB");
}

#[test]
fn custom_currency_table_is_used_for_conversion() {
    let table = CurrencyTable::new(vec![
        CurrencyEntry::new("rub", "руб", 1.0),
        CurrencyEntry::new("gbp", "GBP", 80.0),
    ])
    .expect("valid table");
    let cash = CashCalculator::with_clock(400, fixed_clock()).with_currencies(table);
    assert_eq!(cash.get_today_cash_remained("gbp"), "На сегодня осталось 5.00 GBP");
    assert_eq!(cash.get_today_cash_remained("usd"), "На сегодня осталось 400.00 руб");
}
