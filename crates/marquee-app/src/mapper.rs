//! Pure conversions between the three movie shapes.
//!
//! Three directions: transfer→cache (defaults applied), cache→domain
//! (projection for the UI), and transfer→domain (used only by the
//! similar-movies path, which has no caching tier). None of these fail;
//! absent or invalid input degrades to a fixed default.

use marquee_api::MovieDto;
use marquee_shared::Movie;
use marquee_store::MovieRow;

/// Map a transfer object to a cache row, substituting defaults for every
/// absent field: empty strings for text, `false` for booleans, `-1` for the
/// id, `0` / `0.0` for the remaining numbers. The genre id list is joined
/// into a comma-separated string, degrading to `""` when absent.
pub fn movie_row_from_dto(dto: &MovieDto) -> MovieRow {
    MovieRow {
        adult: dto.adult.unwrap_or(false),
        backdrop_path: dto.backdrop_path.clone().unwrap_or_default(),
        genre_ids: dto
            .genre_ids
            .as_ref()
            .map(|ids| {
                ids.iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default(),
        id: dto.id.unwrap_or(-1),
        original_language: dto.original_language.clone().unwrap_or_default(),
        original_title: dto.original_title.clone().unwrap_or_default(),
        overview: dto.overview.clone().unwrap_or_default(),
        popularity: dto.popularity.unwrap_or(0.0),
        poster_path: dto.poster_path.clone().unwrap_or_default(),
        release_date: dto.release_date.clone().unwrap_or_default(),
        title: dto.title.clone().unwrap_or_default(),
        video: dto.video.unwrap_or(false),
        vote_average: dto.vote_average.unwrap_or(0.0),
        vote_count: dto.vote_count.unwrap_or(0),
    }
}

/// Project a cache row onto the domain model. Only the fields the UI
/// renders survive; genre ids stay behind in the row (see
/// [`genre_ids_from_row`]).
pub fn movie_from_row(row: &MovieRow) -> Movie {
    Movie {
        id: row.id,
        title: row.title.clone(),
        original_title: row.original_title.clone(),
        overview: row.overview.clone(),
        poster_path: row.poster_path.clone(),
        backdrop_path: row.backdrop_path.clone(),
    }
}

/// Map a transfer object straight to the domain model.
pub fn movie_from_dto(dto: &MovieDto) -> Movie {
    Movie {
        id: dto.id.unwrap_or(-1),
        title: dto.title.clone().unwrap_or_default(),
        original_title: dto.original_title.clone().unwrap_or_default(),
        overview: dto.overview.clone().unwrap_or_default(),
        poster_path: dto.poster_path.clone().unwrap_or_default(),
        backdrop_path: dto.backdrop_path.clone().unwrap_or_default(),
    }
}

/// Split the stored comma-joined genre string back into integers.
/// Any parse failure suppresses the whole list to empty.
pub fn genre_ids_from_row(row: &MovieRow) -> Vec<i64> {
    row.genre_ids
        .split(',')
        .filter(|part| !part.is_empty())
        .map(|part| part.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_default()
}
