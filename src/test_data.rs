#[cfg(test)]
pub const POST_DATA_MD: &str = "# What I learned after 20+ years of software development
How to be a great software engineer?

Someone asked me this question today and I didn’t have an answer. After thinking for a while, I came up with a list of what I try to do myself.

Disclaimer: I don't think I am a great engineer, but I would love to have listened to that myself when I started my career, over 20 years ago.

## Non technical

### Have a honest image of yourself

You finished university and learned a lot. You solved many hard problems.
";

#[cfg(test)]
pub const LINKEDIN_REPOST: &str = "*Originally published on LinkedIn.* [Read it there](https://www.linkedin.com/pulse/x). This is the real content of the post which is long enough to pass the length check easily.";

#[cfg(test)]
pub const POSTS_JSON: &str = r###"[
  {
    "_id": "post-1",
    "title": "Agents in the supply chain",
    "slug": {"_type": "slug", "current": "agents-in-the-supply-chain"},
    "publishedAt": "2024-01-01T09:00:00Z",
    "estimatedReadingTime": 7,
    "tags": ["ai", "supply-chain"],
    "author": {"name": "Jordan"},
    "body": "## Intro\n\nAgentic systems are changing how planners work every single day."
  },
  {
    "_id": "post-2",
    "title": "Draft without slug",
    "slug": null,
    "publishedAt": "2024-03-01T09:00:00Z"
  },
  {
    "_id": "post-3",
    "title": "Cricket and data",
    "slug": "cricket-and-data",
    "publishedAt": "2024-02-10T18:30:00Z",
    "body": [
      {"_type": "block", "_key": "a", "style": "normal", "children": [{"_type": "span", "text": "Test matches produce a surprising amount of data."}]},
      {"_type": "image", "asset": {"_ref": "image-1"}}
    ]
  }
]"###;

#[cfg(test)]
pub const REVIEWS_JSON: &str = r###"[
  {
    "_id": "review-1",
    "title": "Dune",
    "slug": {"current": "dune"},
    "bookAuthor": "Frank Herbert",
    "rating": "Obsessed",
    "publishedAt": "2024-06-01T12:00:00Z",
    "tags": ["sci-fi"],
    "isbn": "9780441013593",
    "body": "A sweeping story about ecology, religion and power on a desert planet."
  },
  {
    "_id": "review-2",
    "title": "Ulysses",
    "slug": {"current": "ulysses"},
    "bookAuthor": "James Joyce",
    "rating": "DNF",
    "publishedAt": "2023-11-20T08:00:00Z",
    "links": {"amazon": "https://amazon.example/ulysses"}
  }
]"###;
