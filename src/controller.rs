//! Interactive, line-oriented menu loop driving a [`Ledger`]

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use log::debug;

use crate::{
    errors::Error,
    io::{self, LoadOutcome},
    types::{Amount, Ledger},
};

/// One menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `1`: prompt for an expense and record it
    Add,
    /// `2`: print every expense
    List,
    /// `3`: print the sum of all amounts
    Total,
    /// `4`: print the largest expense
    Largest,
    /// `5`: write the ledger to the CSV file
    Save,
    /// `6`: replace the ledger with the CSV file contents
    Load,
    /// `0`: end the session
    Quit,
}

impl Command {
    /// Maps a trimmed input line to a command, or `None` if it is not a menu choice
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Total),
            "4" => Some(Self::Largest),
            "5" => Some(Self::Save),
            "6" => Some(Self::Load),
            "0" => Some(Self::Quit),
            _ => None,
        }
    }
}

const MENU: &str = "
===== 미니 가계부 =====
1. 지출 추가
2. 지출 목록 보기
3. 지출 총합 보기
4. 가장 많이 쓴 항목 보기
5. CSV로 저장
6. CSV에서 불러오기
0. 종료";

const EMPTY: &str = "지출 내역이 없습니다.";

const NO_LARGEST: &str = "지출 내역 없음";

/// A single interactive session.
///
/// Commands are read one line at a time from `input`; prompts and results go to `output`.
/// Running out of input while a line is expected ends the session with
/// [`Error::InputExhausted`].
#[derive(Debug)]
pub struct Session<R, W, L> {
    input: R,
    output: W,
    ledger: L,
    file: PathBuf,
}

impl<R, W, L> Session<R, W, L>
where
    R: BufRead,
    W: Write,
    L: Ledger,
{
    /// Creates a session over the given streams, saving to and loading from `file`
    pub fn new(input: R, output: W, ledger: L, file: impl Into<PathBuf>) -> Self {
        Self {
            input,
            output,
            ledger,
            file: file.into(),
        }
    }

    /// Returns the ledger driven by this session
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Consumes the session, handing back the ledger
    pub fn into_ledger(self) -> L {
        self.ledger
    }

    /// Runs the menu loop until [`Command::Quit`] is chosen.
    ///
    /// # Errors
    /// [`Error::InputExhausted`] when input ends first, [`Error::Field`] from an aborted load,
    /// or [`Error::Io`] on any terminal or file failure.
    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let choice = self.prompt("선택 > ")?;
            match Command::from_input(&choice) {
                Some(Command::Quit) => {
                    debug!("Session ended by user");
                    return Ok(());
                }
                Some(command) => self.execute(command)?,
                None => writeln!(self.output, "잘못된 입력입니다.")?,
            }
        }
    }

    /// Carries out one menu command
    pub fn execute(&mut self, command: Command) -> Result<(), Error> {
        debug!("Executing {command:?}");
        match command {
            Command::Add => self.add_expense(),
            Command::List => self.show_expenses(),
            Command::Total => self.show_total(),
            Command::Largest => self.show_largest(),
            Command::Save => {
                io::save_to_path(&self.file, &self.ledger)?;
                writeln!(self.output, "CSV 저장 완료!")?;
                Ok(())
            }
            Command::Load => {
                match io::load_from_path(&self.file, &mut self.ledger)? {
                    LoadOutcome::Missing => writeln!(self.output, "CSV 파일 없음")?,
                    LoadOutcome::Loaded(count) => {
                        writeln!(self.output, "CSV 불러오기 완료! ({count}건)")?
                    }
                }
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    fn add_expense(&mut self) -> Result<(), Error> {
        let amount = self.prompt_amount("금액 입력: ")?;
        let memo = self.prompt("메모 입력: ")?;
        let date = self.prompt("날짜 입력(YYYY-MM-DD): ")?;
        let id = self.ledger.add(amount, memo, date);
        debug!("Added expense {id}");
        writeln!(self.output, "지출이 추가되었습니다.")?;
        Ok(())
    }

    fn show_expenses(&mut self) -> Result<(), Error> {
        let Some(expenses) = self.ledger.list() else {
            writeln!(self.output, "{EMPTY}")?;
            return Ok(());
        };
        writeln!(self.output, "\n--- 지출 목록 ---")?;
        for expense in expenses {
            writeln!(self.output, "{expense}")?;
        }
        Ok(())
    }

    fn show_total(&mut self) -> Result<(), Error> {
        match self.ledger.total() {
            Some(total) => writeln!(self.output, "총 지출: {total}원")?,
            None => writeln!(self.output, "{EMPTY}")?,
        }
        Ok(())
    }

    fn show_largest(&mut self) -> Result<(), Error> {
        match self.ledger.largest() {
            Some(expense) => writeln!(
                self.output,
                "가장 많이 쓴 항목: {}원 ({})",
                expense.amount(),
                expense.memo()
            )?,
            None => writeln!(self.output, "{NO_LARGEST}")?,
        }
        Ok(())
    }

    /// Writes a prompt and reads one trimmed line of input
    fn prompt(&mut self, prompt: &str) -> Result<String, Error> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputExhausted);
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until the answer parses as an amount
    fn prompt_amount(&mut self, prompt: &str) -> Result<Amount, Error> {
        loop {
            match self.prompt(prompt)?.parse() {
                Ok(amount) => return Ok(amount),
                Err(_) => writeln!(self.output, "숫자를 입력해주세요.")?,
            }
        }
    }
}
