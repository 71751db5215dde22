//! NFT viewer
//!
//! Loads one token: owner, SVG image and the five feature codes, fetched
//! concurrently. Any failed read fails the whole load so a half-updated
//! display is never shown.

use alloy_primitives::{Address, U256};
use shared::utils::truncate_address;

use crate::core::error::AppError;
use crate::services::contract::{FeatureCodes, NftContract};
use crate::services::rpc::RpcTransport;
use crate::state::session::Session;
use crate::utils::constants::TOKEN_TITLE_PREFIX;
use crate::utils::validation::parse_token_id;

pub const LOADED_MESSAGE: &str = "NFT loaded!";
pub const LOAD_LABEL: &str = "Load NFT";
pub const LOADING_LABEL: &str = "Loading...";

pub const FEATURE_NAMES: [&str; 5] = ["Background", "Face", "Eye", "Mouth", "Hair"];

pub const FEATURE_VALUES: [&[&str]; 5] = [
    &["Green", "Blue", "Purple", "Orange", "Red"],
    &["Light", "Medium", "Dark"],
    &["Normal", "Wink"],
    &["Smile", "Surprise"],
    &["Black", "Brown", "Gray"],
];

const UNKNOWN_FEATURE: &str = "Unknown";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub value: &'static str,
}

/// Map the raw codes through the feature table.
pub fn describe_features(codes: &FeatureCodes) -> Vec<Attribute> {
    FEATURE_NAMES
        .iter()
        .zip(FEATURE_VALUES.iter())
        .zip(codes.iter())
        .map(|((name, values), code)| Attribute {
            name: *name,
            value: values.get(*code as usize).copied().unwrap_or(UNKNOWN_FEATURE),
        })
        .collect()
}

/// The session may remint a token it owns, and the contract owner may remint
/// any token.
pub fn can_remint(session: &Session, token_owner: Address) -> bool {
    session.is_owner || session.address == Some(token_owner)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenView {
    pub token_id: U256,
    pub title: String,
    pub owner: Address,
    /// `0x1234...abcd`
    pub owner_short: String,
    /// Rendered verbatim.
    pub svg: String,
    pub attributes: Vec<Attribute>,
    pub can_remint: bool,
}

impl TokenView {
    /// Remint input for the displayed token, independent of later edits to
    /// the token id field.
    pub fn remint_input(&self) -> String {
        self.token_id.to_string()
    }
}

/// Load token `input` for the viewer panel.
pub async fn load_token<T: RpcTransport>(
    contract: Option<&NftContract<T>>,
    session: &Session,
    input: &str,
) -> Result<TokenView, AppError> {
    let contract =
        contract.ok_or_else(|| AppError::Validation("Please connect your wallet first".to_string()))?;
    let token_id = parse_token_id(input)
        .ok_or_else(|| AppError::Validation("Please enter a valid token ID".to_string()))?;

    log::info!("[VIEWER] Loading token #{}", token_id);

    let (owner, svg, codes) = futures::try_join!(
        contract.owner_of(token_id),
        contract.svg(token_id),
        contract.features(token_id)
    )?;

    let owner_hex = owner.to_checksum(None);
    Ok(TokenView {
        token_id,
        title: format!("{} #{}", TOKEN_TITLE_PREFIX, token_id),
        owner,
        owner_short: truncate_address(&owner_hex),
        svg,
        attributes: describe_features(&codes),
        can_remint: can_remint(session, owner),
    })
}

/// Message shown in the viewer region when a load fails.
pub fn load_failed_message(err: &AppError) -> String {
    match err {
        AppError::Validation(message) => message.clone(),
        other => format!("Load failed: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::MockChain;
    use futures::executor::block_on;

    fn values(attributes: &[Attribute]) -> Vec<&'static str> {
        attributes.iter().map(|attribute| attribute.value).collect()
    }

    fn user() -> Session {
        Session {
            address: Some(MockChain::USER),
            is_owner: false,
        }
    }

    #[test]
    fn test_feature_table() {
        assert_eq!(
            values(&describe_features(&[0, 1, 0, 0, 2])),
            vec!["Green", "Medium", "Normal", "Smile", "Gray"]
        );
        assert_eq!(
            values(&describe_features(&[4, 2, 1, 1, 0])),
            vec!["Red", "Dark", "Wink", "Surprise", "Black"]
        );
    }

    #[test]
    fn test_out_of_range_code_is_unknown() {
        let attributes = describe_features(&[5, 0, 2, 0, 9]);
        assert_eq!(values(&attributes), vec!["Unknown", "Light", "Unknown", "Smile", "Unknown"]);
        assert_eq!(attributes[4].name, "Hair");
    }

    #[test]
    fn test_load_token_three() {
        let chain = MockChain::new().with_token(3, MockChain::USER, [0, 1, 0, 0, 2]);
        let contract = chain.contract_for(MockChain::USER);
        let token = block_on(load_token(Some(&contract), &user(), "3")).unwrap();

        assert_eq!(token.title, "Simple Feature #3");
        assert_eq!(token.owner, MockChain::USER);
        assert_eq!(token.owner_short, "0xAaAA...AaA1");
        assert!(token.svg.starts_with("<svg"));
        assert_eq!(
            values(&token.attributes),
            vec!["Green", "Medium", "Normal", "Smile", "Gray"]
        );
        assert!(token.can_remint);
    }

    #[test]
    fn test_remint_targets_displayed_token() {
        let chain = MockChain::new().with_token(7, MockChain::USER, [0, 0, 0, 0, 0]);
        let contract = chain.contract_for(MockChain::USER);
        let token = block_on(load_token(Some(&contract), &user(), " 007 ")).unwrap();

        assert_eq!(token.token_id, U256::from(7u64));
        assert_eq!(token.remint_input(), "7");
    }

    #[test]
    fn test_remint_control_visibility() {
        let chain = MockChain::new().with_token(1, MockChain::OTHER, [0, 0, 0, 0, 0]);
        let contract = chain.contract_for(MockChain::USER);

        let token = block_on(load_token(Some(&contract), &user(), "1")).unwrap();
        assert!(!token.can_remint);

        let owner = Session {
            address: Some(MockChain::OWNER),
            is_owner: true,
        };
        assert!(can_remint(&owner, MockChain::OTHER));
    }

    #[test]
    fn test_missing_token_fails_whole_load() {
        let chain = MockChain::new();
        let contract = chain.contract_for(MockChain::USER);
        let err = block_on(load_token(Some(&contract), &user(), "42")).unwrap_err();

        assert_eq!(err, AppError::Contract("ERC721: invalid token ID".to_string()));
        assert_eq!(load_failed_message(&err), "Load failed: ERC721: invalid token ID");
    }

    #[test]
    fn test_load_validates_before_fetching() {
        let chain = MockChain::new();
        let contract = chain.contract_for(MockChain::USER);

        let err = block_on(load_token(None::<&NftContract<MockChain>>, &Session::default(), "1"))
            .unwrap_err();
        assert_eq!(load_failed_message(&err), "Please connect your wallet first");

        for input in ["", "0", "-2", "x"] {
            let err = block_on(load_token(Some(&contract), &user(), input)).unwrap_err();
            assert_eq!(load_failed_message(&err), "Please enter a valid token ID");
        }
        assert_eq!(chain.request_count(), 0);
    }
}
