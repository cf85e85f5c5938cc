#![allow(dead_code)]

use anchor_lang::prelude::*;
use anchor_lang::InstructionData;
use solana_program::keccak;
use solana_program::system_program;
use solana_program_test::*;
use solana_sdk::instruction::{AccountMeta, Instruction, InstructionError};
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::system_instruction;
use solana_sdk::transaction::{Transaction, TransactionError};

use tier_passport::errors::PassportError;
use tier_passport::sig::eth_address;

// The processor callback type wants independent account/data lifetimes while
// the generated entrypoint unifies them; this elided-lifetime wrapper lets
// variance bridge the two.
fn entry(
    program_id: &Pubkey,
    accounts: &[solana_program::account_info::AccountInfo],
    data: &[u8],
) -> solana_program::entrypoint::ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    tier_passport::entry(program_id, accounts, data)
}

pub fn program_test() -> ProgramTest {
    ProgramTest::new("tier_passport", tier_passport::id(), processor!(entry))
}

// ---------------------------------------------------------------------------
// PDAs

pub fn pda_protocol() -> Pubkey {
    Pubkey::find_program_address(
        &[tier_passport::constants::PROTOCOL_SEED],
        &tier_passport::id(),
    )
    .0
}

pub fn pda_passport(holder: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[tier_passport::constants::PASSPORT_SEED, holder.as_ref()],
        &tier_passport::id(),
    )
    .0
}

pub fn pda_nonce(nonce: &[u8; 32]) -> Pubkey {
    Pubkey::find_program_address(
        &[tier_passport::constants::NONCE_SEED, nonce.as_ref()],
        &tier_passport::id(),
    )
    .0
}

// ---------------------------------------------------------------------------
// Off-chain admin signer

pub struct AdminSigner {
    sk: libsecp256k1::SecretKey,
}

impl AdminSigner {
    pub fn new(seed: u8) -> Self {
        Self {
            sk: libsecp256k1::SecretKey::parse(&[seed; 32]).unwrap(),
        }
    }

    pub fn address(&self) -> [u8; 20] {
        let pubkey = libsecp256k1::PublicKey::from_secret_key(&self.sk).serialize();
        eth_address(&pubkey[1..65].try_into().unwrap())
    }

    /// personal_sign-prefixed recoverable signature, v in {27, 28}.
    pub fn sign_digest(&self, digest: &[u8; 32]) -> [u8; 65] {
        let prefixed =
            keccak::hashv(&[b"\x19Ethereum Signed Message:\n32", digest]).to_bytes();
        let message = libsecp256k1::Message::parse(&prefixed);
        let (sig, rec) = libsecp256k1::sign(&message, &self.sk);

        let mut out = [0u8; 65];
        out[..64].copy_from_slice(&sig.serialize());
        out[64] = 27 + rec.serialize();
        out
    }
}

// ---------------------------------------------------------------------------
// Transaction plumbing

pub async fn fund(ctx: &mut ProgramTestContext, dest: &Pubkey, lamports: u64) {
    let ix = system_instruction::transfer(&ctx.payer.pubkey(), dest, lamports);
    let bh = ctx.banks_client.get_latest_blockhash().await.unwrap();
    let tx =
        Transaction::new_signed_with_payer(&[ix], Some(&ctx.payer.pubkey()), &[&ctx.payer], bh);
    ctx.banks_client.process_transaction(tx).await.unwrap();
}

pub async fn send_ixs(
    context: &mut ProgramTestContext,
    payer: &Keypair,
    ixs: Vec<Instruction>,
) -> std::result::Result<(), BanksClientError> {
    // Fresh blockhash so a byte-identical retry is not deduplicated before
    // it reaches the program.
    let bh = context.get_new_latest_blockhash().await.unwrap();
    let tx = Transaction::new_signed_with_payer(&ixs, Some(&payer.pubkey()), &[payer], bh);
    context.banks_client.process_transaction(tx).await
}

pub fn assert_passport_error(err: BanksClientError, expected: PassportError) {
    match err.unwrap() {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            // Anchor maps custom errors through its 6000 offset.
            assert_eq!(code, u32::from(expected), "unexpected custom error code")
        }
        other => panic!("expected custom program error, got {other:?}"),
    }
}

pub async fn read_account<T: anchor_lang::AccountDeserialize>(
    ctx: &mut ProgramTestContext,
    address: &Pubkey,
) -> T {
    let account = ctx
        .banks_client
        .get_account(*address)
        .await
        .unwrap()
        .expect("account not found");
    T::try_deserialize(&mut account.data.as_slice()).unwrap()
}

// ---------------------------------------------------------------------------
// Instruction builders

pub fn ix_initialize(admin: &Pubkey, treasury: Pubkey, claim_signer: [u8; 20]) -> Instruction {
    Instruction {
        program_id: tier_passport::id(),
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(pda_protocol(), false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: tier_passport::instruction::Initialize {
            treasury,
            claim_signer,
        }
        .data(),
    }
}

pub fn ix_mint(
    payer: &Pubkey,
    holder: &Pubkey,
    treasury: &Pubkey,
    payment_lamports: u64,
) -> Instruction {
    Instruction {
        program_id: tier_passport::id(),
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*holder, false),
            AccountMeta::new_readonly(pda_protocol(), false),
            AccountMeta::new(pda_passport(holder), false),
            AccountMeta::new(*treasury, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: tier_passport::instruction::Mint {
            payment_lamports,
            extra_data: vec![],
        }
        .data(),
    }
}

pub fn ix_claim_points(
    payer: &Pubkey,
    claimant: &Pubkey,
    nonce: [u8; 32],
    amount: u64,
    signature: [u8; 65],
) -> Instruction {
    Instruction {
        program_id: tier_passport::id(),
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*claimant, false),
            AccountMeta::new_readonly(pda_protocol(), false),
            AccountMeta::new(pda_passport(claimant), false),
            AccountMeta::new(pda_nonce(&nonce), false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: tier_passport::instruction::ClaimPoints {
            nonce,
            amount,
            signature,
        }
        .data(),
    }
}

pub fn ix_claim_session(
    payer: &Pubkey,
    claimant: &Pubkey,
    nonce: [u8; 32],
    duration_secs: u64,
    participants: u32,
    is_host: bool,
    signature: [u8; 65],
) -> Instruction {
    Instruction {
        program_id: tier_passport::id(),
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*claimant, false),
            AccountMeta::new_readonly(pda_protocol(), false),
            AccountMeta::new(pda_passport(claimant), false),
            AccountMeta::new(pda_nonce(&nonce), false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: tier_passport::instruction::ClaimSession {
            nonce,
            duration_secs,
            participants,
            is_host,
            signature,
        }
        .data(),
    }
}

pub fn ix_sweep(
    admin: &Pubkey,
    mint: &Pubkey,
    vault_ata: &Pubkey,
    recipient_ata: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: tier_passport::id(),
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new_readonly(pda_protocol(), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(*vault_ata, false),
            AccountMeta::new(*recipient_ata, false),
            AccountMeta::new_readonly(spl_token_2022::id(), false),
        ],
        data: tier_passport::instruction::SweepForeignToken { amount }.data(),
    }
}

pub fn ix_update_admin(admin: &Pubkey, new_admin: Pubkey) -> Instruction {
    Instruction {
        program_id: tier_passport::id(),
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(pda_protocol(), false),
        ],
        data: tier_passport::instruction::UpdateAdmin { new_admin }.data(),
    }
}

pub fn ix_set_treasury(admin: &Pubkey, new_treasury: Pubkey) -> Instruction {
    Instruction {
        program_id: tier_passport::id(),
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(pda_protocol(), false),
        ],
        data: tier_passport::instruction::SetTreasury { new_treasury }.data(),
    }
}

pub fn ix_set_claim_signer(admin: &Pubkey, new_signer: [u8; 20]) -> Instruction {
    Instruction {
        program_id: tier_passport::id(),
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(pda_protocol(), false),
        ],
        data: tier_passport::instruction::SetClaimSigner { new_signer }.data(),
    }
}

// ---------------------------------------------------------------------------
// Token-2022 fixtures (sweep path)

pub async fn create_mint_t22(
    ctx: &mut ProgramTestContext,
    payer: &Keypair,
    mint_kp: &Keypair,
    decimals: u8,
) {
    use solana_program::program_pack::Pack;
    use spl_token_2022 as spl_t22;

    let mint_len = spl_t22::state::Mint::LEN;
    let rent = ctx
        .banks_client
        .get_rent()
        .await
        .unwrap()
        .minimum_balance(mint_len);
    let create = system_instruction::create_account(
        &payer.pubkey(),
        &mint_kp.pubkey(),
        rent,
        mint_len as u64,
        &spl_t22::id(),
    );
    let init_mint = spl_t22::instruction::initialize_mint2(
        &spl_t22::id(),
        &mint_kp.pubkey(),
        &payer.pubkey(),
        None,
        decimals,
    )
    .unwrap();

    let bh = ctx.banks_client.get_latest_blockhash().await.unwrap();
    let tx = Transaction::new_signed_with_payer(
        &[create, init_mint],
        Some(&payer.pubkey()),
        &[payer, mint_kp],
        bh,
    );
    ctx.banks_client.process_transaction(tx).await.unwrap();
}

pub async fn create_ata(
    ctx: &mut ProgramTestContext,
    payer: &Keypair,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Pubkey {
    use spl_associated_token_account as spl_ata;
    use spl_token_2022 as spl_t22;

    let ata = spl_ata::get_associated_token_address_with_program_id(owner, mint, &spl_t22::id());
    let ix = spl_ata::instruction::create_associated_token_account(
        &payer.pubkey(),
        owner,
        mint,
        &spl_t22::id(),
    );
    send_ixs(ctx, payer, vec![ix]).await.unwrap();
    ata
}

pub async fn mint_tokens_to(
    ctx: &mut ProgramTestContext,
    payer: &Keypair,
    mint: &Pubkey,
    dest: &Pubkey,
    authority: &Keypair,
    amount: u64,
    decimals: u8,
) {
    use spl_token_2022 as spl_t22;

    let ix = spl_t22::instruction::mint_to_checked(
        &spl_t22::id(),
        mint,
        dest,
        &authority.pubkey(),
        &[],
        amount,
        decimals,
    )
    .unwrap();
    let bh = ctx.banks_client.get_latest_blockhash().await.unwrap();
    let tx =
        Transaction::new_signed_with_payer(&[ix], Some(&payer.pubkey()), &[payer, authority], bh);
    ctx.banks_client.process_transaction(tx).await.unwrap();
}

pub async fn token_balance(ctx: &mut ProgramTestContext, ata: &Pubkey) -> u64 {
    use spl_token_2022 as spl_t22;

    let account = ctx
        .banks_client
        .get_account(*ata)
        .await
        .unwrap()
        .expect("token account not found");
    let state =
        spl_t22::extension::StateWithExtensions::<spl_t22::state::Account>::unpack(&account.data)
            .unwrap();
    state.base.amount
}
