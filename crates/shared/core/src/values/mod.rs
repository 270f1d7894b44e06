use rust_decimal::Decimal;

/// Dollar amount - uses Decimal for precision
pub type Money = Decimal;

/// Percentage in the 0-100 range
pub type Percent = Decimal;

/// Identifier of a listed loan
pub type LoanId = u64;

/// Identifier of an owned note
pub type NoteId = u64;

/// Identifier of an investor portfolio
pub type PortfolioId = u64;

/// Identifier of a pending fund transfer
pub type TransferId = u64;

/// Investor account number, used in endpoint paths and order payloads
pub type InvestorId = u64;
