//! Word lists the user generator draws from.

pub const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Aaron", "Abigail", "Adam", "Adrian", "Aiden", "Alex", "Alice", "Amara", "Amelia",
    "Andre", "Angela", "Anna", "Anthony", "Aria", "Arthur", "Ava", "Benjamin", "Bianca", "Blake",
    "Brandon", "Brooke", "Caleb", "Camila", "Carlos", "Caroline", "Carter", "Charlotte", "Chloe",
    "Christian", "Claire", "Connor", "Daniel", "Daisy", "David", "Delilah", "Diego", "Dominic",
    "Dylan", "Eleanor", "Elena", "Elijah", "Ella", "Emily", "Emma", "Ethan", "Evelyn", "Ezra",
    "Felix", "Fiona", "Gabriel", "Grace", "Hannah", "Harper", "Hazel", "Henry", "Hudson", "Isaac",
    "Isabella", "Ivy", "Jack", "Jacob", "James", "Jasmine", "Jayden", "Julia", "Julian", "Kai",
    "Layla", "Leah", "Leo", "Levi", "Liam", "Lily", "Logan", "Lucas", "Lucy", "Luna", "Madison",
    "Maya", "Mason", "Mateo", "Mia", "Miles", "Naomi", "Nathan", "Nora", "Oliver", "Olivia",
    "Owen", "Penelope", "Quinn", "Riley", "Ruby", "Samuel", "Sarah", "Sebastian", "Sofia",
    "Stella", "Theo", "Thomas", "Victoria", "Violet", "William", "Wyatt", "Zoe",
];

pub const LAST_NAMES: &[&str] = &[
    "Adams", "Allen", "Alvarez", "Anderson", "Bailey", "Baker", "Barnes", "Bell", "Bennett",
    "Brooks", "Brown", "Butler", "Campbell", "Carter", "Castillo", "Chavez", "Clark", "Collins",
    "Cook", "Cooper", "Cox", "Cruz", "Davis", "Diaz", "Edwards", "Evans", "Fisher", "Flores",
    "Foster", "Garcia", "Gomez", "Gonzalez", "Gray", "Green", "Griffin", "Hall", "Harris",
    "Hayes", "Hernandez", "Hill", "Howard", "Hughes", "Jackson", "James", "Jenkins", "Johnson",
    "Jones", "Kelly", "Kim", "King", "Lee", "Lewis", "Long", "Lopez", "Martin", "Martinez",
    "Mendoza", "Miller", "Mitchell", "Moore", "Morales", "Morgan", "Murphy", "Myers", "Nelson",
    "Nguyen", "O'Brien", "Ortiz", "Parker", "Patel", "Perez", "Perry", "Peterson", "Phillips",
    "Powell", "Price", "Ramirez", "Reed", "Reyes", "Richardson", "Rivera", "Roberts", "Robinson",
    "Rodriguez", "Rogers", "Ross", "Ruiz", "Sanchez", "Sanders", "Scott", "Smith", "Stewart",
    "Sullivan", "Taylor", "Thomas", "Thompson", "Torres", "Turner", "Walker", "Ward", "Watson",
    "White", "Williams", "Wilson", "Wood", "Wright", "Young",
];

pub const MAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com"];

pub const USERNAME_WORDS: &[&str] = &[
    "beat", "bass", "drum", "echo", "groove", "jazz", "lofi", "melody", "mix", "neon", "pulse",
    "riff", "rhythm", "synth", "tempo", "vinyl", "vibe", "wave", "chord", "disco", "funk", "indie",
    "punk", "soul", "track", "loop", "sample", "reverb", "tape", "static",
];

pub const STREET_NAMES: &[&str] = &[
    "Maple", "Oak", "Pine", "Cedar", "Elm", "Willow", "Birch", "Lake", "Hill", "Sunset",
    "Park", "River", "Washington", "Lincoln", "Jefferson", "Madison", "Franklin", "Highland",
    "Meadow", "Spring", "Church", "Mill", "Valley", "Forest", "Ridge",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Boulevard", "Lane", "Drive", "Court", "Way", "Place", "Terrace",
];

pub const CITIES: &[&str] = &[
    "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton", "Fairview",
    "Salem", "Madison", "Georgetown", "Arlington", "Ashland", "Burlington", "Dover", "Hudson",
    "Kingston", "Lebanon", "Manchester", "Milton", "Newport", "Oxford", "Plymouth", "Richmond",
    "Troy", "Winchester",
];

pub const STATES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa", "Kansas",
    "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan", "Minnesota",
    "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire", "New Jersey",
    "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio", "Oklahoma", "Oregon",
    "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota", "Tennessee", "Texas",
    "Utah", "Vermont", "Virginia", "Washington", "West Virginia", "Wisconsin", "Wyoming",
];

pub const COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Austria", "Belgium", "Brazil", "Canada", "Chile", "Colombia",
    "Denmark", "Egypt", "Finland", "France", "Germany", "Greece", "India", "Ireland", "Italy",
    "Japan", "Kenya", "Mexico", "Netherlands", "New Zealand", "Nigeria", "Norway", "Peru",
    "Poland", "Portugal", "South Africa", "South Korea", "Spain", "Sweden", "Switzerland",
    "United Kingdom", "United States",
];

pub const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum",
];
