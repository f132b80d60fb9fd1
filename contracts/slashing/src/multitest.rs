mod suite;

use assert_matches::assert_matches;
use cosmwasm_std::Decimal;
use cw_controllers::AdminError;
use param_store::ParamsError;
use suite::SuiteBuilder;

use crate::error::ContractError;
use crate::state::params::{ParamChange, Params};

#[test]
fn instantiate_works() {
    let suite = SuiteBuilder::new().build();

    assert_eq!(suite.get_params(), Params::default());
    assert_eq!(
        suite.get_admin().admin,
        Some(suite.admin().to_string())
    );
    assert_eq!(suite.get_min_signed_per_window(), 50);
    assert_eq!(suite.get_param_keys().keys.len(), 10);
}

mod instantiation {
    use super::*;

    #[test]
    fn custom_params_are_installed() {
        let params = Params {
            signed_blocks_window: 10_000,
            min_signed_per_window: Decimal::percent(80),
            bsc_side_chain_id: "rialto".to_string(),
            ..Params::default()
        };
        let suite = SuiteBuilder::new().with_params(params.clone()).build();

        assert_eq!(suite.get_params(), params);
        assert_eq!(suite.get_signed_blocks_window(), 10_000);
        assert_eq!(suite.get_min_signed_per_window(), 8_000);
        assert_eq!(suite.get_bsc_side_chain_id(), "rialto");
    }

    #[test]
    fn without_admin() {
        let mut suite = SuiteBuilder::new().frozen().build();
        assert_eq!(suite.get_admin().admin, None);

        let owner = suite.owner().clone();
        let err = suite
            .update_param(&owner, ParamChange::SlashAmount(1))
            .unwrap_err();
        assert_eq!(
            ContractError::Admin(AdminError::NotAdmin {}),
            err.downcast::<ContractError>().unwrap()
        );
    }
}

mod params_update {
    use super::*;

    #[test]
    fn whole_set_update_works() {
        let mut suite = SuiteBuilder::new().build();
        let admin = suite.admin().clone();

        let params = Params {
            signed_blocks_window: 7,
            min_signed_per_window: Decimal::percent(60),
            slash_fraction_downtime: Decimal::permille(5),
            ..Params::default()
        };
        let res = suite.update_params(&admin, params.clone()).unwrap();
        assert!(res
            .events
            .iter()
            .any(|e| e.ty == "wasm-slashing_params_update"));

        assert_eq!(suite.get_params(), params);
        assert_eq!(suite.get_slash_fraction_downtime(), Decimal::permille(5));
        // floor(7 * 0.6)
        assert_eq!(suite.get_min_signed_per_window(), 4);
    }

    #[test]
    fn rejected_set_keeps_previous_values() {
        let mut suite = SuiteBuilder::new().build();
        let admin = suite.admin().clone();

        let err = suite
            .update_params(
                &admin,
                Params {
                    signed_blocks_window: -5,
                    ..Params::default()
                },
            )
            .unwrap_err();
        assert_matches!(
            err.downcast::<ContractError>().unwrap(),
            ContractError::Params(ParamsError::InvalidParam { key, .. }) if key == "SignedBlocksWindow"
        );

        assert_eq!(suite.get_params(), Params::default());
    }

    #[test]
    fn single_param_update_works() {
        let mut suite = SuiteBuilder::new().build();
        let admin = suite.admin().clone();

        suite
            .update_param(&admin, ParamChange::MinSignedPerWindow(Decimal::percent(25)))
            .unwrap();
        assert_eq!(suite.get_min_signed_fraction(), Decimal::percent(25));
        assert_eq!(suite.get_min_signed_per_window(), 25);

        suite
            .update_param(&admin, ParamChange::BscSideChainId("chapel".to_string()))
            .unwrap();
        assert_eq!(suite.get_bsc_side_chain_id(), "chapel");

        let expected = Params {
            min_signed_per_window: Decimal::percent(25),
            bsc_side_chain_id: "chapel".to_string(),
            ..Params::default()
        };
        assert_eq!(suite.get_params(), expected);
    }

    #[test]
    fn invalid_single_param_is_rejected() {
        let mut suite = SuiteBuilder::new().build();
        let admin = suite.admin().clone();

        let err = suite
            .update_param(
                &admin,
                ParamChange::SlashFractionDoubleSign(Decimal::percent(101)),
            )
            .unwrap_err();
        assert_matches!(
            err.downcast::<ContractError>().unwrap(),
            ContractError::Params(ParamsError::InvalidParam { key, .. }) if key == "SlashFractionDoubleSign"
        );

        let err = suite
            .update_param(&admin, ParamChange::BscSideChainId(String::new()))
            .unwrap_err();
        assert_matches!(
            err.downcast::<ContractError>().unwrap(),
            ContractError::Params(ParamsError::InvalidParam { key, .. }) if key == "BscSideChainId"
        );

        assert_eq!(suite.get_params(), Params::default());
        assert!(suite.try_get_min_signed_per_window().is_ok());
    }

    #[test]
    fn non_admin_cannot_update() {
        let mut suite = SuiteBuilder::new().build();
        let stranger = suite.addr_make("stranger");

        let err = suite
            .update_params(&stranger, Params::default())
            .unwrap_err();
        assert_eq!(
            ContractError::Admin(AdminError::NotAdmin {}),
            err.downcast::<ContractError>().unwrap()
        );
    }

    #[test]
    fn admin_handover() {
        let mut suite = SuiteBuilder::new().build();
        let admin = suite.admin().clone();
        let next = suite.addr_make("next_gov");

        suite.update_admin(&admin, Some(&next)).unwrap();
        assert_eq!(suite.get_admin().admin, Some(next.to_string()));

        suite
            .update_param(&next, ParamChange::SignedBlocksWindow(1))
            .unwrap();
        assert_eq!(suite.get_min_signed_per_window(), 0);

        let err = suite
            .update_param(&admin, ParamChange::SignedBlocksWindow(2))
            .unwrap_err();
        assert_eq!(
            ContractError::Admin(AdminError::NotAdmin {}),
            err.downcast::<ContractError>().unwrap()
        );
    }
}

mod migration {
    use super::*;

    #[test]
    fn migrate_works() {
        let mut suite = SuiteBuilder::new().build();
        let owner = suite.owner().clone();

        suite.migrate(&owner).unwrap();
        assert_eq!(suite.get_params(), Params::default());
    }
}
