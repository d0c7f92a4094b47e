/// A whitespace-delimited, punctuation-stripped unit of text.
/// Examples: `hello`, `don't`, `` (punctuation-only words strip to empty)
pub type Token = String;
/// Integer id assigned to a token within one group's vocabulary.
pub type TokenId = u64;
/// Base filename of a song's lyric file.
/// Example: `1973_love_lyrics.txt`
pub type SongName = String;
/// Key naming a partition of the input files.
/// Examples: `all`, `1970s`, `2010s`
pub type GroupKey = String;
/// Ordered id sequence representing one song's tokens, in reading order.
pub type Quantization = Vec<TokenId>;
