use serde::{Deserialize, Serialize};

use crate::values::PortfolioId;

/// Named bucket of notes in the investor account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub portfolio_id: PortfolioId,
    pub portfolio_name: String,
    #[serde(default)]
    pub portfolio_description: Option<String>,
}

impl Portfolio {
    pub fn id(&self) -> PortfolioId {
        self.portfolio_id
    }

    pub fn name(&self) -> &str {
        &self.portfolio_name
    }

    /// Empty string when the portfolio has no description
    pub fn description(&self) -> &str {
        self.portfolio_description.as_deref().unwrap_or("")
    }
}

/// Portfolios owned by one investor account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Portfolios {
    portfolios: Vec<Portfolio>,
}

impl Portfolios {
    pub fn new(portfolios: Vec<Portfolio>) -> Self {
        Self { portfolios }
    }

    pub fn contains(&self, id: PortfolioId) -> bool {
        self.portfolios.iter().any(|p| p.portfolio_id == id)
    }

    pub fn get(&self, id: PortfolioId) -> Option<&Portfolio> {
        self.portfolios.iter().find(|p| p.portfolio_id == id)
    }

    pub fn len(&self) -> usize {
        self.portfolios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.portfolios.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Portfolio> {
        self.portfolios.iter()
    }
}

impl IntoIterator for Portfolios {
    type Item = Portfolio;
    type IntoIter = std::vec::IntoIter<Portfolio>;

    fn into_iter(self) -> Self::IntoIter {
        self.portfolios.into_iter()
    }
}

impl<'a> IntoIterator for &'a Portfolios {
    type Item = &'a Portfolio;
    type IntoIter = std::slice::Iter<'a, Portfolio>;

    fn into_iter(self) -> Self::IntoIter {
        self.portfolios.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_description_is_empty() {
        let portfolio: Portfolio = serde_json::from_value(serde_json::json!({
            "portfolioId": 5,
            "portfolioName": "Retirement",
            "portfolioDescription": null
        }))
        .unwrap();

        assert_eq!(portfolio.id(), 5);
        assert_eq!(portfolio.name(), "Retirement");
        assert_eq!(portfolio.description(), "");
    }

    #[test]
    fn test_contains() {
        let portfolios = Portfolios::new(vec![Portfolio {
            portfolio_id: 3,
            portfolio_name: "Growth".to_string(),
            portfolio_description: Some("high yield".to_string()),
        }]);

        assert!(portfolios.contains(3));
        assert!(!portfolios.contains(4));
        assert_eq!(portfolios.get(3).map(Portfolio::description), Some("high yield"));
        assert_eq!(portfolios.len(), 1);
    }
}
