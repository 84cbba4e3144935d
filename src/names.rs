//! Built-in English first-name lists for the demo binary.

pub const MALE_FIRST_NAMES: &[&str] = &[
    "Aaron", "Adam", "Alan", "Albert", "Alexander", "Andrew", "Anthony", "Arthur",
    "Benjamin", "Bobby", "Brandon", "Brian", "Bruce", "Carl", "Charles", "Christopher",
    "Daniel", "David", "Dennis", "Donald", "Douglas", "Edward", "Eric", "Eugene",
    "Frank", "Gary", "George", "Gerald", "Gregory", "Harold", "Henry", "Jack",
    "James", "Jason", "Jeffrey", "Jeremy", "Jerry", "Joe", "John", "Jonathan",
    "Joseph", "Joshua", "Juan", "Justin", "Keith", "Kenneth", "Kevin", "Larry",
    "Lawrence", "Mark", "Matthew", "Michael", "Nicholas", "Patrick", "Paul", "Peter",
    "Philip", "Ralph", "Raymond", "Richard", "Robert", "Roger", "Ronald", "Roy",
    "Russell", "Ryan", "Samuel", "Scott", "Sean", "Stephen", "Steven", "Terry",
    "Thomas", "Timothy", "Walter", "Wayne", "William", "Willie",
];

pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "Alice", "Amanda", "Amy", "Andrea", "Angela", "Ann", "Anna", "Ashley",
    "Barbara", "Betty", "Beverly", "Brenda", "Carol", "Carolyn", "Catherine", "Cheryl",
    "Christina", "Christine", "Cynthia", "Deborah", "Debra", "Denise", "Diana", "Diane",
    "Donna", "Doris", "Dorothy", "Elizabeth", "Emily", "Evelyn", "Frances", "Gloria",
    "Heather", "Helen", "Jacqueline", "Janet", "Janice", "Jean", "Jennifer", "Jessica",
    "Joan", "Joyce", "Judith", "Judy", "Julia", "Julie", "Karen", "Katherine",
    "Kathleen", "Kathryn", "Kelly", "Kimberly", "Laura", "Linda", "Lisa", "Margaret",
    "Maria", "Marie", "Marilyn", "Martha", "Mary", "Melissa", "Michelle", "Mildred",
    "Nancy", "Nicole", "Pamela", "Patricia", "Rachel", "Rebecca", "Rose", "Ruth",
    "Sandra", "Sara", "Sarah", "Sharon", "Shirley", "Stephanie", "Susan", "Teresa",
    "Theresa", "Virginia",
];
