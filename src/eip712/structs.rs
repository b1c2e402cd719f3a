//! Typed-data structs signed for Nado requests.
//!
//! Every struct name is the EIP712 primary type of the matching request.

alloy::sol! {
    /// `place_order` message.
    #[derive(Debug, PartialEq, Eq)]
    struct Order {
        bytes32 sender;
        int128 priceX18;
        int128 amount;
        uint64 expiration;
        uint64 nonce;
        uint128 appendix;
    }

    /// `place_isolated_order` message.
    #[derive(Debug, PartialEq, Eq)]
    struct IsolatedOrder {
        bytes32 sender;
        int128 priceX18;
        int128 amount;
        uint64 expiration;
        uint64 nonce;
        uint128 appendix;
        int128 margin;
    }

    /// `cancel_orders` message.
    #[derive(Debug, PartialEq, Eq)]
    struct Cancellation {
        bytes32 sender;
        uint32[] productIds;
        bytes32[] digests;
        uint64 nonce;
    }

    /// `cancel_product_orders` message.
    #[derive(Debug, PartialEq, Eq)]
    struct CancellationProducts {
        bytes32 sender;
        uint32[] productIds;
        uint64 nonce;
    }

    /// `withdraw_collateral` message.
    #[derive(Debug, PartialEq, Eq)]
    struct WithdrawCollateral {
        bytes32 sender;
        uint32 productId;
        uint128 amount;
        uint64 nonce;
    }

    /// `liquidate_subaccount` message.
    #[derive(Debug, PartialEq, Eq)]
    struct LiquidateSubaccount {
        bytes32 sender;
        bytes32 liquidatee;
        uint8 mode;
        uint32 healthGroup;
        int128 amount;
        uint64 nonce;
    }

    /// `link_signer` message.
    #[derive(Debug, PartialEq, Eq)]
    struct LinkSigner {
        bytes32 sender;
        bytes32 signer;
        uint64 nonce;
    }

    /// `transfer_quote` message.
    #[derive(Debug, PartialEq, Eq)]
    struct TransferQuote {
        bytes32 sender;
        bytes32 recipient;
        uint128 amount;
        uint64 nonce;
    }

    /// `list_trigger_orders` message.
    #[derive(Debug, PartialEq, Eq)]
    struct ListTriggerOrders {
        bytes32 sender;
        uint64 recvTime;
    }

    /// `leaderboard_authentication` message.
    #[derive(Debug, PartialEq, Eq)]
    struct LeaderboardAuthentication {
        bytes32 sender;
        uint64 expiration;
    }

    /// `mint_nlp` message.
    #[derive(Debug, PartialEq, Eq)]
    struct MintNlp {
        bytes32 sender;
        uint128 quoteAmount;
        uint64 nonce;
    }

    /// `burn_nlp` message.
    #[derive(Debug, PartialEq, Eq)]
    struct BurnNlp {
        bytes32 sender;
        uint128 nlpAmount;
        uint64 nonce;
    }
}

/// Values hashed for a `place_order` request.
pub type EIP712OrderValues = Order;

/// Values hashed for a `place_isolated_order` request.
pub type EIP712IsolatedOrderValues = IsolatedOrder;
