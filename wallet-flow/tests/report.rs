//! End-to-end test: a serialized wallet-action snapshot goes in, a
//! display-ready report comes out.
use rust_decimal::Decimal;
use std::str::FromStr;
use wallet_flow::report::{ActionOutcome, ActionSnapshot, build_report};
use wallet_flow_registry::{InMemoryRegistry, RegistryManifest};
use wallet_flow_shared::types::{MintOutcome, StepContent, WalletActionResult};

const MINT_TOKEN: &str = "0x2260fac5e5542a773aa44fbcfedf7c193bc2c599";

fn registry() -> InMemoryRegistry {
    let manifest: RegistryManifest = serde_json::from_str(&format!(
        r#"{{
            "tokens": [
                {{
                    "id": "mooBIFI",
                    "symbol": "mooBIFI",
                    "chainId": "ethereum",
                    "decimals": 18,
                    "kind": {{ "type": "erc20", "address": "{MINT_TOKEN}" }}
                }}
            ]
        }}"#
    ))
    .unwrap();
    InMemoryRegistry::from_manifest(manifest)
}

/// Snapshot of a finished mint that was actually served from existing
/// supply: the only transfer goes from the mint contract to the user.
fn buy_snapshot() -> ActionSnapshot {
    let json = format!(
        r#"{{
            "walletAction": {{
                "result": "success",
                "receipt": {{
                    "from": "0xd8da6bf26964af9d7eed9e03e53415d37aa96045",
                    "to": "0x06325440d014e39736583c165c2963ba99faf14e",
                    "events": {{
                        "Transfer": {{
                            "address": "{MINT_TOKEN}",
                            "topics": [
                                "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef",
                                "0x00000000000000000000000006325440d014e39736583c165c2963ba99faf14e",
                                "0x000000000000000000000000d8da6bf26964af9d7eed9e03e53415d37aa96045"
                            ],
                            "data": "0x0000000000000000000000000000000000000000000000000c7d713b49da0000",
                            "transactionHash": "0x5427daee8d03277f8a30ea881692c04861e692ce5f305b7a689b76248cae63c4",
                            "logIndex": 12
                        }}
                    }}
                }},
                "metadata": {{
                    "kind": "mint",
                    "token": {{
                        "id": "mooBIFI",
                        "symbol": "mooBIFI",
                        "chainId": "ethereum",
                        "decimals": 18,
                        "kind": {{ "type": "erc20", "address": "{MINT_TOKEN}" }}
                    }},
                    "amount": "1"
                }}
            }},
            "stepper": {{
                "chainId": "ethereum",
                "modal": true,
                "items": [
                    {{ "kind": "approve", "message": "Approval", "pending": false }},
                    {{ "kind": "mint", "message": "Confirm mint", "pending": false }}
                ],
                "currentStep": 1,
                "content": "success"
            }}
        }}"#
    );
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_buy_snapshot_reports_bought_outcome() {
    let snapshot = buy_snapshot();
    let report = build_report(&snapshot, &registry()).unwrap();

    assert_eq!(report.progress, 50.0);
    assert!(!report.stepping);
    assert!(!report.error_bar);
    assert!(report.success_bar);

    match report.outcome {
        Some(ActionOutcome::Mint(MintOutcome::Bought { token, amount })) => {
            assert_eq!(token.id, "mooBIFI");
            assert_eq!(amount, Decimal::from_str("0.9").unwrap());
        }
        other => panic!("expected a bought outcome, got {other:?}"),
    }
}

#[test]
fn test_pending_snapshot_reports_progress_only() {
    let mut snapshot = buy_snapshot();
    snapshot.wallet_action.result = WalletActionResult::PendingConfirmation;
    snapshot.stepper.content = StepContent::Stepping;

    let report = build_report(&snapshot, &registry()).unwrap();
    assert_eq!(report.progress, 75.0);
    assert!(report.stepping);
    assert!(report.outcome.is_none());
    assert!(!report.success_bar);
}

#[test]
fn test_report_serializes_to_json() {
    let report = build_report(&buy_snapshot(), &registry()).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"kind\":\"mint\""));
    assert!(json.contains("\"type\":\"bought\""));
}
