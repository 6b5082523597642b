//! Tier-specific advice
//!
//! Each tier has a template: headline lines, a table of category call-outs
//! gated by `spending > total_income * threshold`, closing lines and an
//! investment block. Output is a pure function of the tier, summary and
//! breakdown.

use serde::{Deserialize, Serialize};

use super::aggregator::{FinancialSummary, SpendingBreakdown};
use super::tier::Tier;
use crate::models::SpendingCategory;

/// Ordered advice lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestions {
    pub savings_tips: Vec<String>,
    pub investment_tips: Vec<String>,
}

/// Values every template line may interpolate
struct Context<'a> {
    currency: &'a str,
    summary: &'a FinancialSummary,
}

impl Context<'_> {
    /// Whole currency units, e.g. `₹1250`
    fn whole(&self, amount: f64) -> String {
        format!("{}{:.0}", self.currency, amount)
    }

    /// Two decimals, e.g. `₹1250.50`
    fn exact(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency, amount)
    }

    fn balance(&self) -> String {
        self.exact(self.summary.balance)
    }

    fn savings_rate(&self) -> f64 {
        self.summary.savings_rate_pct
    }

    fn expenses(&self) -> f64 {
        self.summary.total_expenses
    }
}

/// Which spending figure a call-out inspects
#[derive(Debug, Clone, Copy)]
enum Target {
    Category(SpendingCategory),
    /// The highest-spending category, if anything was spent
    Largest,
}

type Lines = fn(&Context<'_>) -> Vec<String>;
type CalloutLines = fn(&Context<'_>, SpendingCategory, f64) -> Vec<String>;

/// A category line emitted when spending exceeds a share of income
struct Callout {
    target: Target,
    threshold: f64,
    lines: CalloutLines,
}

struct Template {
    headline: Lines,
    callouts: &'static [Callout],
    closing: Lines,
    investment: Lines,
}

const CRITICAL_CALLOUTS: &[Callout] = &[
    Callout {
        target: Target::Category(SpendingCategory::Food),
        threshold: 0.30,
        lines: |ctx, _, amount| {
            vec![format!(
                "• **Food ({})**: Cut by 30% through meal planning, bulk buying, home cooking",
                ctx.whole(amount)
            )]
        },
    },
    Callout {
        target: Target::Category(SpendingCategory::Entertainment),
        threshold: 0.15,
        lines: |ctx, _, amount| {
            vec![format!(
                "• **Entertainment ({})**: Cancel subscriptions, choose free activities",
                ctx.whole(amount)
            )]
        },
    },
    Callout {
        target: Target::Category(SpendingCategory::Shopping),
        threshold: 0.15,
        lines: |ctx, _, amount| {
            vec![format!(
                "• **Shopping ({})**: Implement 30-day rule before any purchase",
                ctx.whole(amount)
            )]
        },
    },
    Callout {
        target: Target::Category(SpendingCategory::Transport),
        threshold: 0.15,
        lines: |ctx, _, amount| {
            vec![format!(
                "• **Transport ({})**: Use public transport, carpool, or walk when possible",
                ctx.whole(amount)
            )]
        },
    },
];

const NEEDS_IMPROVEMENT_CALLOUTS: &[Callout] = &[
    Callout {
        target: Target::Category(SpendingCategory::Food),
        threshold: 0.25,
        lines: |ctx, _, amount| {
            vec![
                format!(
                    "🍽️ **Food ({})**: {:.1}% of income. Reduce to 20% by:",
                    ctx.whole(amount),
                    ctx.summary.share_of_income(amount)
                ),
                format!(
                    "  • Weekly meal prep (saves {}/month)",
                    ctx.whole(amount * 0.2)
                ),
                "  • Pack lunch instead of eating out".to_string(),
                "  • Buy groceries in bulk during sales".to_string(),
            ]
        },
    },
    Callout {
        target: Target::Category(SpendingCategory::Entertainment),
        threshold: 0.10,
        lines: |ctx, _, amount| {
            vec![
                format!(
                    "🎬 **Entertainment ({})**: Too high at {:.1}%",
                    ctx.whole(amount),
                    ctx.summary.share_of_income(amount)
                ),
                "  • Limit to one paid subscription".to_string(),
                "  • Use free entertainment options".to_string(),
                format!("  • Potential savings: {}/month", ctx.whole(amount * 0.3)),
            ]
        },
    },
    Callout {
        target: Target::Category(SpendingCategory::Shopping),
        threshold: 0.15,
        lines: |ctx, _, amount| {
            vec![
                format!("🛍️ **Shopping ({})**: Reduce impulse buying", ctx.whole(amount)),
                "  • Wait 24 hours before non-essential purchases".to_string(),
                "  • Unsubscribe from promotional emails".to_string(),
            ]
        },
    },
];

const MODERATE_CALLOUTS: &[Callout] = &[
    Callout {
        target: Target::Category(SpendingCategory::Food),
        threshold: 0.20,
        lines: |ctx, _, amount| {
            vec![format!(
                "🍽️ **Optimize Food**: Currently {}. Save {} through bulk buying",
                ctx.whole(amount),
                ctx.whole(amount * 0.15)
            )]
        },
    },
    Callout {
        target: Target::Category(SpendingCategory::Transport),
        threshold: 0.10,
        lines: |ctx, _, amount| {
            vec![format!(
                "🚗 **Transport**: {} can be reduced by carpooling or monthly passes",
                ctx.whole(amount)
            )]
        },
    },
];

const GOOD_CALLOUTS: &[Callout] = &[Callout {
    target: Target::Largest,
    threshold: 0.15,
    lines: |ctx, category, amount| {
        vec![
            format!(
                "🔍 **Optimization**: {} is your highest expense ({})",
                category,
                ctx.whole(amount)
            ),
            format!(
                "  • Even 10% reduction saves {}/month",
                ctx.whole(amount * 0.1)
            ),
        ]
    },
}];

fn template(tier: Tier) -> Template {
    match tier {
        Tier::Critical => Template {
            headline: |ctx| {
                vec![
                    "🚨 **URGENT**: You're spending more than you earn!".to_string(),
                    format!(
                        "💰 **Current Status**: Balance is {} (Savings rate: {:.1}%)",
                        ctx.balance(),
                        ctx.savings_rate()
                    ),
                    "⚠️ **Immediate Actions**:".to_string(),
                ]
            },
            callouts: CRITICAL_CALLOUTS,
            closing: |ctx| {
                vec![format!(
                    "🎯 **Goal**: Reduce expenses by at least {}/month to break even",
                    ctx.whole(ctx.summary.balance.abs())
                )]
            },
            investment: |ctx| {
                vec![
                    "❌ **No Investments Yet**: Focus 100% on cutting expenses first".to_string(),
                    "📋 **Priority Steps**:".to_string(),
                    "1. Create emergency expense list".to_string(),
                    "2. Negotiate bills (electricity, internet, mobile)".to_string(),
                    "3. Sell unused items".to_string(),
                    "4. Consider side income sources".to_string(),
                    format!(
                        "5. Only after positive cash flow, start {}500/month RD",
                        ctx.currency
                    ),
                ]
            },
        },
        Tier::NeedsImprovement => Template {
            headline: |ctx| {
                vec![
                    format!(
                        "⚠️ **Low Savings**: Currently saving {:.1}% ({}/month)",
                        ctx.savings_rate(),
                        ctx.balance()
                    ),
                    "🎯 **Target**: Aim for 20-25% savings rate".to_string(),
                ]
            },
            callouts: NEEDS_IMPROVEMENT_CALLOUTS,
            closing: |_| Vec::new(),
            investment: |ctx| {
                let c = ctx.currency;
                vec![
                    format!(
                        "💼 **Start Small**: With {} available, begin with:",
                        ctx.balance()
                    ),
                    format!(
                        "• Emergency Fund - Save {} first (3 months expenses)",
                        ctx.whole(ctx.expenses() * 3.0)
                    ),
                    format!("• Recurring Deposit - {}1,000/month for 1 year", c),
                    format!("• PPF Account - Start with {}500/month", c),
                    format!(
                        "• After 6 months, start Mutual Fund SIP with {}1,000/month",
                        c
                    ),
                ]
            },
        },
        Tier::Moderate => Template {
            headline: |ctx| {
                vec![
                    format!(
                        "✅ **Decent Progress**: Saving {:.1}% ({}/month)",
                        ctx.savings_rate(),
                        ctx.balance()
                    ),
                    "🎯 **Next Goal**: Reach 30% savings rate".to_string(),
                ]
            },
            callouts: MODERATE_CALLOUTS,
            closing: |_| {
                vec!["💡 **50-30-20 Rule**: Try 50% needs, 30% wants, 20% savings".to_string()]
            },
            investment: |ctx| {
                let c = ctx.currency;
                vec![
                    format!(
                        "📈 **Growing Portfolio**: With {}, expand investments:",
                        ctx.balance()
                    ),
                    format!(
                        "• Emergency Fund - {} target",
                        ctx.whole(ctx.expenses() * 6.0)
                    ),
                    format!("• Mutual Fund SIP - {}2,500/month (diversified equity)", c),
                    format!("• PPF - {}3,000/month (tax saving)", c),
                    format!("• Fixed Deposit - {}10,000 for emergencies", c),
                    format!("• Health Insurance - Get {}5L coverage", c),
                ]
            },
        },
        Tier::Good => Template {
            headline: |ctx| {
                vec![
                    format!(
                        "🎉 **Strong Finances**: {:.1}% savings rate ({}/month)",
                        ctx.savings_rate(),
                        ctx.balance()
                    ),
                    "🌟 **You're ahead of 70% of people!**".to_string(),
                ]
            },
            callouts: GOOD_CALLOUTS,
            closing: |_| vec!["💎 **Advanced Tip**: Automate savings on payday".to_string()],
            investment: |ctx| {
                let c = ctx.currency;
                vec![
                    format!(
                        "🚀 **Aggressive Growth**: With {}, build wealth:",
                        ctx.balance()
                    ),
                    format!(
                        "• Emergency Fund - {} (Complete)",
                        ctx.whole(ctx.expenses() * 6.0)
                    ),
                    format!("• Equity Mutual Funds - {}5,000/month SIP", c),
                    format!("• PPF - Max {}12,500/month ({}1.5L/year)", c, c),
                    format!("• Direct Stocks - Invest {}10,000 in blue-chip stocks", c),
                    "• Real Estate Fund - Consider REIT investments".to_string(),
                    "• Term Insurance - Get 1 Crore coverage".to_string(),
                ]
            },
        },
        Tier::Excellent => Template {
            headline: |ctx| {
                vec![
                    format!(
                        "🏆 **OUTSTANDING**: {:.1}% savings! ({}/month)",
                        ctx.savings_rate(),
                        ctx.balance()
                    ),
                    "🌟 **Top 5% of budgeters!**".to_string(),
                    "💪 **Maintain Excellence**:".to_string(),
                    "• Continue tracking every expense".to_string(),
                    "• Review budget quarterly".to_string(),
                    "• Share your strategies with others!".to_string(),
                ]
            },
            callouts: &[],
            closing: |_| Vec::new(),
            investment: |ctx| {
                let balance = ctx.summary.balance;
                vec![
                    format!(
                        "💎 **Wealth Building Mode**: With {}, maximize returns:",
                        ctx.balance()
                    ),
                    "• **Aggressive Portfolio Mix**:".to_string(),
                    format!(
                        "  ├─ 60% Equity (Mutual Funds + Stocks): {}/month",
                        ctx.whole(balance * 0.6)
                    ),
                    format!("  ├─ 20% Debt (PPF + FD): {}/month", ctx.whole(balance * 0.2)),
                    format!("  ├─ 10% Gold: {}/month", ctx.whole(balance * 0.1)),
                    format!(
                        "  └─ 10% International Funds: {}/month",
                        ctx.whole(balance * 0.1)
                    ),
                    "• **Long-term Goals**:".to_string(),
                    "  • Real Estate - Save for down payment".to_string(),
                    format!("  • Retirement Fund - NPS with {}5,000/month", ctx.currency),
                    "  • Children's Education Fund - If applicable".to_string(),
                    format!(
                        "• **Insurance**: 1-2 Crore term insurance, {}10L health insurance",
                        ctx.currency
                    ),
                ]
            },
        },
    }
}

impl Callout {
    /// The category and amount this call-out reports on, if it fires
    fn evaluate(
        &self,
        summary: &FinancialSummary,
        breakdown: &SpendingBreakdown,
    ) -> Option<(SpendingCategory, f64)> {
        let (category, amount) = match self.target {
            Target::Category(category) => (category, breakdown.get(category)),
            Target::Largest => {
                if breakdown.total() <= 0.0 {
                    return None;
                }
                breakdown.largest()
            }
        };

        (amount > summary.total_income * self.threshold).then_some((category, amount))
    }
}

/// Renders advice text in a given currency
#[derive(Debug, Clone)]
pub struct AdviceGenerator {
    currency: String,
}

impl Default for AdviceGenerator {
    fn default() -> Self {
        Self::new("₹")
    }
}

impl AdviceGenerator {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    /// Generate savings and investment tips for a tier
    pub fn generate(
        &self,
        tier: Tier,
        summary: &FinancialSummary,
        breakdown: &SpendingBreakdown,
    ) -> Suggestions {
        let ctx = Context {
            currency: &self.currency,
            summary,
        };
        let template = template(tier);

        let mut savings_tips = (template.headline)(&ctx);
        for callout in template.callouts {
            if let Some((category, amount)) = callout.evaluate(summary, breakdown) {
                savings_tips.extend((callout.lines)(&ctx, category, amount));
            }
        }
        savings_tips.extend((template.closing)(&ctx));

        Suggestions {
            savings_tips,
            investment_tips: (template.investment)(&ctx),
        }
    }
}
