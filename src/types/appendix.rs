use fastnum::{UD64, UD128};

use super::{OrderExecutionType, TriggerType};

/// Margin transferred into an isolated position, in quote units.
///
/// The packed appendix stores it at the layout's wire precision,
/// see [`crate::appendix::AppendixLayout`].
#[derive(Clone, Copy, PartialEq, derive_more::Debug)]
pub struct IsolatedFields {
    #[debug("{margin}")]
    margin: UD128,
}

/// Parameters of a TWAP trigger order.
#[derive(Clone, Copy, PartialEq, derive_more::Debug)]
pub struct TwapFields {
    num_orders: u32,
    #[debug("{slippage_frac}")]
    slippage_frac: UD64,
}

/// Execution metadata attached to an order besides its price and amount.
///
/// An order is either isolated or TWAP, never both. TWAP parameters are only
/// meaningful together with a [`TriggerType::Twap`] or
/// [`TriggerType::TwapCustomAmounts`] trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrderAppendix {
    order_execution_type: OrderExecutionType,
    trigger_type: Option<TriggerType>,
    reduce_only: bool,
    isolated: Option<IsolatedFields>,
    twap: Option<TwapFields>,
}

impl IsolatedFields {
    pub fn new(margin: UD128) -> Self {
        Self { margin }
    }

    pub fn margin(&self) -> UD128 {
        self.margin
    }
}

impl TwapFields {
    pub fn new(num_orders: u32, slippage_frac: UD64) -> Self {
        Self {
            num_orders,
            slippage_frac,
        }
    }

    /// Number of TWAP orders to be placed.
    pub fn num_orders(&self) -> u32 {
        self.num_orders
    }

    /// Maximum slippage of each TWAP order against the oracle price at
    /// execution, `0.01` is 1%.
    pub fn slippage_frac(&self) -> UD64 {
        self.slippage_frac
    }
}

impl OrderAppendix {
    pub fn new(order_execution_type: OrderExecutionType) -> Self {
        Self {
            order_execution_type,
            ..Default::default()
        }
    }

    pub fn with_trigger(mut self, trigger_type: TriggerType) -> Self {
        self.trigger_type = Some(trigger_type);
        self
    }

    pub fn with_reduce_only(mut self, reduce_only: bool) -> Self {
        self.reduce_only = reduce_only;
        self
    }

    pub fn with_isolated(mut self, margin: UD128) -> Self {
        self.isolated = Some(IsolatedFields::new(margin));
        self
    }

    pub fn with_twap(mut self, num_orders: u32, slippage_frac: UD64) -> Self {
        self.twap = Some(TwapFields::new(num_orders, slippage_frac));
        self
    }

    pub(crate) fn from_parts(
        order_execution_type: OrderExecutionType,
        trigger_type: Option<TriggerType>,
        reduce_only: bool,
        isolated: Option<IsolatedFields>,
        twap: Option<TwapFields>,
    ) -> Self {
        Self {
            order_execution_type,
            trigger_type,
            reduce_only,
            isolated,
            twap,
        }
    }

    pub fn order_execution_type(&self) -> OrderExecutionType {
        self.order_execution_type
    }

    pub fn trigger_type(&self) -> Option<TriggerType> {
        self.trigger_type
    }

    pub fn reduce_only(&self) -> bool {
        self.reduce_only
    }

    pub fn isolated(&self) -> Option<&IsolatedFields> {
        self.isolated.as_ref()
    }

    pub fn twap(&self) -> Option<&TwapFields> {
        self.twap.as_ref()
    }
}
