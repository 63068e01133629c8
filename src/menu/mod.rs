//! Interactive menu controller
//!
//! Drives the two sequential loops of a library session: the login loop
//! (multi-user mode only), then the main command loop until exit. Every
//! iteration renders a menu, reads one line, and dispatches; unrecognized
//! choices report an error and re-loop without touching any state.
//!
//! The controller is generic over its input and output streams so the loops
//! can be driven by string buffers in tests and by stdin/stdout in the
//! binary.

use std::io::{BufRead, Write};
use std::time::Instant;

use crate::config::Settings;
use crate::display::{format_album_list, format_filtered_list};
use crate::error::{ShelfError, ShelfResult};
use crate::models::{Album, AlbumField, User};
use crate::services::{add_favourite, filter_albums, login, remove_favourite, signup, sort_albums};
use crate::storage::LibraryData;

/// The interactive menu session
pub struct MenuController<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    /// Create a controller over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run a full session over the loaded library data.
    ///
    /// In multi-user mode the login loop gates entry to the main loop; in
    /// single-user mode the main loop starts immediately against the shared
    /// favourites list. Returns when the operator chooses exit; the caller
    /// saves the mutated data.
    pub fn run(&mut self, data: &mut LibraryData, settings: &mut Settings) -> ShelfResult<()> {
        writeln!(self.output, "MUSIC LIBRARY")?;

        match data {
            LibraryData::MultiUser { albums, users } => {
                let session = self.login_loop(users)?;
                let index = session.user_index();
                writeln!(self.output, "Logged in as {}", users[index].username)?;
                let favourites = &mut users[index].favourites;
                self.main_loop(albums, favourites, settings)
            }
            LibraryData::SingleUser { albums, favourites } => {
                self.main_loop(albums, favourites, settings)
            }
        }
    }

    /// Repeat the login menu until a login succeeds. There is no attempt
    /// limit and no lockout.
    fn login_loop(&mut self, users: &mut Vec<User>) -> ShelfResult<crate::services::Session> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "WELCOME")?;
            writeln!(self.output, "1: Log In")?;
            writeln!(self.output, "2: Sign Up")?;
            let choice = self.prompt("Enter a selection (1-2)")?;

            match choice.as_str() {
                "1" => {
                    let username = self.prompt("Username")?;
                    let password = self.prompt("Password")?;
                    match login(users, &username, &password) {
                        Ok(session) => return Ok(session),
                        Err(e) => writeln!(self.output, "{}", e)?,
                    }
                }
                "2" => {
                    let username = self.prompt("Username")?;
                    let password = self.prompt("Password")?;
                    match signup(users, &username, &password) {
                        Ok(()) => {
                            writeln!(self.output, "Account created. Please log in.")?;
                        }
                        Err(e) => writeln!(self.output, "{}", e)?,
                    }
                }
                _ => writeln!(self.output, "Invalid input")?,
            }
        }
    }

    /// The main command loop, until exit
    fn main_loop(
        &mut self,
        albums: &mut Vec<Album>,
        favourites: &mut Vec<Album>,
        settings: &mut Settings,
    ) -> ShelfResult<()> {
        loop {
            let choice = self.write_menu()?;
            writeln!(self.output)?;

            match choice.as_str() {
                "1" => {
                    writeln!(self.output, "ALL ALBUMS")?;
                    write!(self.output, "{}", format_album_list(albums, &settings.display))?;
                }
                "2" => self.filter_command(albums, settings)?,
                "3" => self.sort_command(albums)?,
                "4" => {
                    match self.prompt_index("Enter index of album to add to favourites")? {
                        Some(index) => match add_favourite(favourites, albums, index) {
                            Ok(()) => {}
                            Err(_) => writeln!(self.output, "Invalid input")?,
                        },
                        None => writeln!(self.output, "Invalid input")?,
                    }
                }
                "5" => {
                    match self.prompt_index("Enter index of album to remove from favourites")? {
                        Some(index) => match remove_favourite(favourites, index) {
                            Ok(_) => {}
                            Err(_) => writeln!(self.output, "Invalid input")?,
                        },
                        None => writeln!(self.output, "Invalid input")?,
                    }
                }
                "6" => {
                    writeln!(self.output, "FAVOURITE ALBUMS")?;
                    write!(
                        self.output,
                        "{}",
                        format_album_list(favourites, &settings.display)
                    )?;
                }
                "7" => {
                    let genre = self.prompt("Would you like to show album's genres? (Y/N)")?;
                    let year = self.prompt("Would you like to show album's year? (Y/N)")?;
                    settings.display.show_genre = genre.eq_ignore_ascii_case("y");
                    settings.display.show_year = year.eq_ignore_ascii_case("y");
                }
                "8" => return Ok(()),
                _ => writeln!(self.output, "Invalid input")?,
            }
        }
    }

    /// Filter by property: prompt for the property and value, then display
    /// the matches numbered by their index in the full collection
    fn filter_command(
        &mut self,
        albums: &mut Vec<Album>,
        settings: &Settings,
    ) -> ShelfResult<()> {
        let field = match self.prompt_field()? {
            Some(field) => field,
            None => {
                writeln!(self.output, "Invalid input")?;
                return Ok(());
            }
        };
        let value = self.prompt("Enter value to filter for")?;

        let matches = filter_albums(albums, field, &value);

        writeln!(self.output)?;
        writeln!(self.output, "Albums with {} matching {}:", field, value)?;
        write!(
            self.output,
            "{}",
            format_filtered_list(albums, &matches, &settings.display)
        )?;
        Ok(())
    }

    /// Sort by property: replace the live collection with the sorted result
    /// and report the elapsed wall-clock time. An invalid property choice
    /// leaves the collection untouched.
    fn sort_command(&mut self, albums: &mut Vec<Album>) -> ShelfResult<()> {
        let field = match self.prompt_field()? {
            Some(field) => field,
            None => {
                writeln!(self.output, "Invalid input")?;
                return Ok(());
            }
        };

        let start = Instant::now();
        *albums = sort_albums(albums, field);
        let elapsed = start.elapsed();

        writeln!(
            self.output,
            "Sorted by {} ({:.6} seconds)",
            field,
            elapsed.as_secs_f64()
        )?;
        Ok(())
    }

    /// Render the main menu and read a selection
    fn write_menu(&mut self) -> ShelfResult<String> {
        writeln!(self.output)?;
        writeln!(self.output, "LIBRARY MENU")?;
        writeln!(self.output, "1: Display All")?;
        writeln!(self.output, "2: Filter by Property")?;
        writeln!(self.output, "3: Sort by Property")?;
        writeln!(self.output, "4: Add to Favourites")?;
        writeln!(self.output, "5: Remove from Favourites")?;
        writeln!(self.output, "6: Display Favourites")?;
        writeln!(self.output, "7: Configure Settings")?;
        writeln!(self.output, "8: Exit and Save")?;
        self.prompt("Enter a selection (1-8)")
    }

    /// Render the property menu and read a field choice
    fn prompt_field(&mut self) -> ShelfResult<Option<AlbumField>> {
        let properties = AlbumField::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| format!("{} - {}", i + 1, field))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(self.output, "Available properties: {}", properties)?;
        let choice = self.prompt("Enter property (1-4)")?;
        Ok(AlbumField::from_menu_choice(&choice))
    }

    /// Prompt for a numeric index; None for non-numeric input
    fn prompt_index(&mut self, text: &str) -> ShelfResult<Option<usize>> {
        let raw = self.prompt(text)?;
        Ok(raw.parse::<usize>().ok())
    }

    /// Write `text: ` and read one trimmed line of input
    fn prompt(&mut self, text: &str) -> ShelfResult<String> {
        write!(self.output, "{}: ", text)?;
        self.output.flush()?;

        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Err(ShelfError::Io("Unexpected end of input".into()));
        }
        Ok(line.trim().to_string())
    }
}
