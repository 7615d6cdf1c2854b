//! Greeting content
//!
//! Everything the presentation says lives here, fixed at build time.

/// A single page of the message flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// The message flow, in reading order
pub const NOTES: &[Note] = &[
    Note {
        icon: "🌹",
        title: "To My Everything",
        text: "From the moment you walked into my life, every day has become a celebration. \
               Today, I celebrate the most beautiful gift the universe ever gave me: you. \
               (And I am sorry the gift I will be giving will be nothing compared to what you mean to me)",
    },
    Note {
        icon: "✨",
        title: "You Are My Sunshine",
        text: "Your smile lights up my darkest days. Your laugh is my favorite melody. \
               Every moment with you feels like a dream I never want to wake up from.",
    },
    Note {
        icon: "💕",
        title: "My Favorite Memories",
        text: "Remember our late-night talks, our silly inside jokes (Eg: My friends and yours too 😉), \
               our fights, the feeling of resolving those fights and smiling after them and all those \
               little moments that mean the world to me? Every single one is a treasure I hold close \
               to my heart.",
    },
    Note {
        icon: "🌱",
        title: "Growing Together",
        text: "I love who we are, but I also love who we’re becoming. Thank you for being the person \
               who challenges me to grow while loving me exactly as I am right now.",
    },
    Note {
        icon: "🚀",
        title: "Our Potential",
        text: "There is no ceiling on what we can do together. I love your ambition, your drive, \
               and the way we push each other to be the best versions of ourselves.",
    },
    Note {
        icon: "✈️",
        title: "Counting the Miles",
        text: "Every mile between us is just a reminder of how much more I’ll appreciate the next \
               time I get to hold you. Distance is temporary; we are permanent.",
    },
    Note {
        icon: "🔥",
        title: "That Spark",
        text: "It’s been so long since our first kiss (I still can’t believe it and I know it wasn't \
               the one we dreamt of 😂), but I still get those same restless butterflies every time \
               your hand brushes against mine. You’ve never lost that magic of making me feel \
               something different.",
    },
    Note {
        icon: "🌙",
        title: "What You Mean To Me",
        text: "You're not just my love, you're my best friend, my peace, my safe place. \
               With you, I've found a love I didn't even know was possible.",
    },
    Note {
        icon: "🎂",
        title: "A Birthday Wish",
        text: "On your special day, I wish you all the happiness, love, and magic that you bring \
               into my life every single day. May this year bring you everything your beautiful \
               heart desires.",
    },
    Note {
        icon: "💖",
        title: "Forever & Always",
        text: "I promise to love you louder, hold you closer, and cherish you more with every \
               passing day. You deserve the world, and I want to give it to you, starting today.",
    },
];

pub mod landing {
    pub const HEART: &str = "❤️";
    pub const TITLE: &str = "Happy Birthday";
    pub const SUBTITLE: &str = "I made something special for you...";
    pub const BEGIN: &str = "Tap to Begin ✨";
    pub const FOOTER: &str = "made with all my love ❤️";
}

pub mod intro {
    pub const ICON: &str = "💝";
    pub const TITLE: &str = "Before you begin...";
    pub const TEXT: &str = "What follows are words written from the deepest corner of my heart. \
                            Please take your time. Read slowly. Feel every word. \
                            This is not something to rush through, it's something to cherish.";
    pub const HINT: &str = "✨ Every note here is a piece of my love for you ✨";
    pub const READY: &str = "I'm ready ❤️";
}

pub mod flow {
    pub const NEXT: &str = "Next ❤️";
    pub const SURPRISE: &str = "See Your Surprise 🎁";
    pub const DOT_READ: &str = "❤️";
    pub const DOT_UNREAD: &str = "🤍";
}

pub mod surprise {
    pub const TEASER_TITLE: &str = "I have something special for you...";
    pub const TEASER_TEXT: &str = "Are you ready?";
    pub const OPEN: &str = "Open Your Gift ✨";

    pub const LETTER_ICON: &str = "💌";
    pub const LETTER_TITLE: &str = "My Letter To You";
    pub const LETTER_GREETING: &str = "My Babdi,";
    pub const LETTER_BODY: &[&str] = &[
        "On this beautiful day, I want you to know that you are the most incredible person \
         I've ever known. You make my world brighter, my heart fuller, and my life more \
         meaningful than I ever thought possible.",
        "Every day with you is a gift, and I am so grateful for your love, your laughter, \
         and your beautiful soul. You have this magical way of making everything better \
         just by being you.",
        "I hope this birthday brings you as much joy as you bring into my life every single \
         day. You deserve the entire universe, and I want to spend forever trying to give it \
         to you.",
    ];
    pub const LETTER_CLOSING: &str = "Happy Birthday, my love.";
    pub const LETTER_SIGNATURE: &str = "Forever yours ❤️ And Always";
    pub const LETTER_HEARTS: &str = "💕 💗 💖 💝 💕";
    pub const FINISHED: &str = "Thank You For Reading 💕";

    pub const FINALE_HEART: &str = "❤️";
    pub const FINALE_TITLE: &str = "Happy Birthday, My Love";
    pub const FINALE_MESSAGE: &str =
        "Thank you for being the one of the most beautiful part of my life.";
    pub const FINALE_SUBMESSAGE: &str = "Go celebrate your day, beautiful ✨";
    pub const FINALE_CREDIT: &str = "made with all my love, just for you ❤️";
}

pub mod music {
    pub const PLAYING_ICON: &str = "🎵";
    pub const PAUSED_ICON: &str = "🎶";
    pub const TOAST: &str = "Music is playing";
}
