use std::fmt;

pub trait Vehicle {
    fn brand(&self) -> &str;

    fn engine(&self) -> String;

    fn speed(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub brand: String,
}

impl Default for Car {
    fn default() -> Self {
        Self {
            brand: "Hyundai".to_string(),
        }
    }
}

impl Vehicle for Car {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn engine(&self) -> String {
        "1.25L Kappa".to_string()
    }

    fn speed(&self) -> f64 {
        100.0
    }
}

/// Something that can reverse its own heading in place.
pub trait Turnable {
    fn make_a_u_turn(&mut self);
}

pub trait TextRepresentable {
    fn text_description(&self) -> String;
}

impl TextRepresentable for Car {
    fn text_description(&self) -> String {
        format!("A {} doing {} km/h", self.brand, self.speed())
    }
}

impl<T> TextRepresentable for Vec<T>
where
    T: TextRepresentable,
{
    fn text_description(&self) -> String {
        let items: Vec<_> = self.iter().map(|item| item.text_description()).collect();
        format!("[{}]", items.join(", "))
    }
}

pub trait Named {
    fn name(&self) -> &str;
}

pub trait Aged {
    fn age(&self) -> u32;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Named for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Aged for Person {
    fn age(&self) -> u32 {
        self.age
    }
}

impl TextRepresentable for Person {
    fn text_description(&self) -> String {
        format!("{} ({})", self.name, self.age)
    }
}

pub fn wish_happy_birthday(someone: &(impl Named + Aged)) -> String {
    format!("Happy birthday {}, you're {}", someone.name(), someone.age())
}

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Named for City {
    fn name(&self) -> &str {
        &self.name
    }
}

pub fn begin_concert(city: &City) -> String {
    format!(
        "Hello, {} with lat: {} and long: {}",
        city.name(),
        city.latitude,
        city.longitude
    )
}

pub trait Machine {
    fn name(&self) -> &str;

    /// Shared by every machine unless it brings its own.
    fn dispatch(&self) -> String {
        format!("{}: Dispatching...", self.name())
    }
}

#[derive(Debug, Default)]
pub struct CoffeeVendingMachine;

impl Machine for CoffeeVendingMachine {
    fn name(&self) -> &str {
        "coffee"
    }
}

#[derive(Debug, Default)]
pub struct TicketMachine;

impl Machine for TicketMachine {
    fn name(&self) -> &str {
        "ticket"
    }

    fn dispatch(&self) -> String {
        "ticket: Printing ticket...".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub name: String,
    pub director: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub name: String,
    pub artist: String,
}

/// An entry in a media library; match on it to get at the concrete item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaItem {
    Movie(Movie),
    Song(Song),
}

impl MediaItem {
    pub fn movie(name: &str, director: &str) -> Self {
        MediaItem::Movie(Movie {
            name: name.to_string(),
            director: director.to_string(),
        })
    }

    pub fn song(name: &str, artist: &str) -> Self {
        MediaItem::Song(Song {
            name: name.to_string(),
            artist: artist.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            MediaItem::Movie(movie) => &movie.name,
            MediaItem::Song(song) => &song.name,
        }
    }

    pub fn is_movie(&self) -> bool {
        matches!(self, MediaItem::Movie(_))
    }

    pub fn is_song(&self) -> bool {
        matches!(self, MediaItem::Song(_))
    }

    pub fn as_movie(&self) -> Option<&Movie> {
        match self {
            MediaItem::Movie(movie) => Some(movie),
            MediaItem::Song(_) => None,
        }
    }

    pub fn as_song(&self) -> Option<&Song> {
        match self {
            MediaItem::Song(song) => Some(song),
            MediaItem::Movie(_) => None,
        }
    }
}

impl From<Movie> for MediaItem {
    fn from(movie: Movie) -> Self {
        MediaItem::Movie(movie)
    }
}

impl From<Song> for MediaItem {
    fn from(song: Song) -> Self {
        MediaItem::Song(song)
    }
}

impl fmt::Display for MediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaItem::Movie(movie) => {
                write!(f, "{} is a movie directed by {}", movie.name, movie.director)
            }
            MediaItem::Song(song) => write!(f, "Song: {} by {}", song.name, song.artist),
        }
    }
}

pub fn sample_library() -> Vec<MediaItem> {
    vec![
        MediaItem::movie("Casablanca", "Michael Curtiz"),
        MediaItem::song("Blue Suede Shoes", "Elvis Presley"),
        MediaItem::movie("Citizen Kane", "Orson Welles"),
        MediaItem::song("The One And Only", "Chesney Hawkes"),
        MediaItem::song("Never Gonna Give You Up", "Rick Astley"),
    ]
}

/// Number of movies and songs in the library.
pub fn count_kinds(library: &[MediaItem]) -> (usize, usize) {
    let movies = library.iter().filter(|item| item.is_movie()).count();
    (movies, library.len() - movies)
}
