use super::{StaticFaq, StaticPost};
use time::macros::date;

pub static STATIC_POSTS: [StaticPost; 4] = [
    StaticPost {
        slug: "position-sizing-basics",
        title: "Position Sizing: The Skill Nobody Teaches First",
        description: "Why the size of a trade matters more than the entry, and a simple framework for sizing every position you take.",
        date: date!(2025 - 03 - 18),
        updated_at: Some(date!(2025 - 06 - 02)),
        author: "Mara Lindqvist",
        tags: &["risk-management", "fundamentals", "trading"],
        cover_image: Some("https://images.tradewise.academy/covers/position-sizing.jpg"),
        read_time: "7 min read",
        word_count: Some(1380),
        meta_title: Some("Position Sizing for Beginners | TradeWise"),
        meta_description: Some(
            "Learn the one-percent rule, volatility-adjusted sizing, and how to survive a losing streak.",
        ),
        target_keyword: Some("position sizing"),
        faq: &[
            StaticFaq {
                question: "What is the one-percent rule?",
                answer: "Never risk more than one percent of your account equity on a single trade, measured from entry to stop.",
            },
            StaticFaq {
                question: "Should position size change with volatility?",
                answer: "Yes. Wider stops on volatile assets mean smaller positions for the same amount of risk.",
            },
        ],
        content: r#"# Position Sizing: The Skill Nobody Teaches First

Most new traders obsess over entries. Professionals obsess over **how much** they put on.

## Why Size Beats Entry

A great entry with a reckless size still ends careers. A mediocre entry with a disciplined size survives long enough to learn.

> Your position size is the only variable you fully control once the order is filled.

The market decides direction. You decide exposure.

## The One-Percent Rule

Risk a fixed fraction of equity per trade. The fraction is measured from entry to stop, not on the notional value of the position.

- Decide your stop before you decide your size.
- Divide the amount you are willing to lose by the distance to the stop.
- Round **down**, never up.

## Volatility-Adjusted Sizing

Assets do not move the same amount every day. A stop that is comfortable on a quiet index is a coin flip on a volatile coin.

1. Measure the average true range over fourteen sessions.
2. Place the stop a multiple of that range away from entry.
3. Size so the stop distance equals your one-percent risk.

## Putting It Together

For example, with a $10,000 account and a 1% rule you risk $100. If BTC trades at $60,000 and your stop sits $1,500 below entry, you buy roughly 0.067 BTC, not a full coin.

Do not widen a stop after entry to avoid taking the loss; that single habit turns small losses into account-ending ones.

## Key Takeaways

Sizing is a habit, not a formula you look up once.

- Risk a fixed fraction per trade.
- Let volatility set the stop, and the stop set the size.
- Never move a stop further away after entry.
"#,
    },
    StaticPost {
        slug: "reading-candlestick-charts",
        title: "Reading Candlestick Charts Without the Mysticism",
        description: "A plain-language guide to what candles actually record, which patterns carry information, and which are folklore.",
        date: date!(2025 - 01 - 27),
        updated_at: None,
        author: "Jonah Achterberg",
        tags: &["technical-analysis", "fundamentals"],
        cover_image: None,
        read_time: "6 min read",
        word_count: Some(1120),
        meta_title: None,
        meta_description: Some(
            "What open, high, low, and close really tell you, and how to read candles in context.",
        ),
        target_keyword: Some("candlestick charts"),
        faq: &[],
        content: r#"# Reading Candlestick Charts Without the Mysticism

Every candle is a summary of a fight between buyers and sellers over a fixed window of time.

## Four Numbers, One Shape

A candle records the *open*, the *high*, the *low*, and the *close*. Everything else is interpretation.

- The body spans open to close.
- The wicks span the extremes.
- Colour only tells you whether close finished above open.

## Context Over Patterns

A hammer in the middle of a range means very little. The same hammer at a level that held three times before tells a story.

> A pattern without location is just a shape; location is what turns it into information.

## Timeframes Change the Story

A daily candle contains twenty-four hourly candles. Zoom in before you trust a single bar on a higher timeframe.

## Common Misreadings

Beginners read every doji as a reversal and every long wick as rejection. Most of the time the next candle simply continues the trend.

See our [guide to support and resistance](/blog/support-and-resistance) for the levels that give candles their meaning.

## Summary

- Candles compress four prices into one shape.
- Location matters more than the pattern name.
- Confirm on a lower timeframe before acting.
"#,
    },
    StaticPost {
        slug: "stop-loss-placement",
        title: "Where to Put Your Stop-Loss (and Where Not To)",
        description: "Stops belong where your idea is proven wrong, not at a round number everyone else is watching.",
        date: date!(2025 - 05 - 09),
        updated_at: None,
        author: "Mara Lindqvist",
        tags: &["risk-management", "trading"],
        cover_image: None,
        read_time: "5 min read",
        word_count: Some(960),
        meta_title: Some("Stop-Loss Placement Guide | TradeWise"),
        meta_description: None,
        target_keyword: Some("stop-loss placement"),
        faq: &[StaticFaq {
            question: "Are mental stops good enough?",
            answer: "Only if you have a perfect record of honouring them. Most traders do not, so use a resting order.",
        }],
        content: r#"# Where to Put Your Stop-Loss (and Where Not To)

A stop is not a prediction. It is the price at which your trade idea is objectively wrong.

## Invalidation, Not Pain Tolerance

Ask where the chart would prove you wrong. That is the stop. How much it hurts is a sizing question, not a placement question.

## Avoid the Obvious Levels

Round numbers and the exact low of yesterday are where everyone else parks their stops. Liquidity hunts target those clusters.

Avoid placing stops exactly at round numbers, because a quick sweep can trigger your stop-loss right before price reverses.

## Structure-Based Stops

Place the stop beyond the swing that defines your setup, plus a buffer sized from recent volatility.

- Long trades: below the most recent higher low.
- Short trades: above the most recent lower high.
- Add a volatility buffer so noise does not take you out.

## Trailing Without Strangling

Trail only behind new structure. Trailing every tick converts winning trades into break-even exits.

Imagine you bought ETH at $3,200 in March with a stop under the $3,050 swing low; trailing to $3,190 on the first green candle would have stopped you out before the run to $3,600.

Do not remove a stop during a fast move; the one time you skip it is the time a gap wipes out a month of gains.

## Conclusion

- Stops mark invalidation, not discomfort.
- Stay away from crowded levels.
- Trail behind structure, never behind every tick.
"#,
    },
    StaticPost {
        slug: "trading-journal",
        title: "Keeping a Trading Journal That You Will Actually Read",
        description: "A lightweight journaling routine that turns every trade into feedback instead of noise.",
        date: date!(2024 - 11 - 04),
        updated_at: Some(date!(2025 - 02 - 14)),
        author: "Priya Raman",
        tags: &["psychology", "fundamentals"],
        cover_image: Some("https://images.tradewise.academy/covers/journal.jpg"),
        read_time: "4 min read",
        word_count: Some(780),
        meta_title: None,
        meta_description: None,
        target_keyword: None,
        faq: &[StaticFaq {
            question: "How long should a journal entry take?",
            answer: "Under five minutes. If it takes longer you will stop doing it within a week.",
        }],
        content: r#"# Keeping a Trading Journal That You Will Actually Read

Journals fail because they are too ambitious. Start with three fields and grow from there.

## The Three Fields

- Why you entered.
- Where you would be proven wrong.
- How you felt when you clicked the button.

## Review Weekly, Not Daily

Daily review invites revenge trading. A weekly review puts enough distance between you and the outcome to see the process.

> The goal of a journal is not to remember trades; it is to notice the same mistake twice.

## Tag Your Mistakes

Give every recurring error a short tag. After a month, count them. The most frequent tag is your next lesson.

Read more in [our position sizing primer](https://www.tradewise.academy/blog/position-sizing-basics).
"#,
    },
];
