//! Double-double tables for the logarithm family.
//!
//! Entry `j` of each table holds log_b(1 + j/128) as `(hi, lo)` binary128 bit
//! patterns; entry 128 is log_b(2).

pub(crate) static LN_TABLE: [(u128, u128); 129] = [
    (0x0000_0000_0000_0000_0000_0000_0000_0000, 0x0000_0000_0000_0000_0000_0000_0000_0000),
    (0x3ff7_fe02_a6b1_0678_8fc3_7690_391d_c283, 0xbf84_6a61_269e_0832_fc62_bc4c_7ec3_bca5),
    (0x3ff8_fc0a_8b0f_c03e_3cf9_eda7_4d37_abd5, 0x3f86_b7d6_077d_207b_b8a6_6ba2_81fc_0aee),
    (0x3ff9_7b91_b07d_5b11_aa92_7f54_c716_bc02, 0xbf86_1958_77ea_d6f1_733b_b2d2_2093_198b),
    (0x3ff9_f829_b0e7_8330_04cf_8fc1_3c7b_c8a8, 0xbf85_4544_147a_cc88_3294_b882_4e29_c072),
    (0x3ffa_39e8_7b9f_ebd5_fa90_15b2_02ab_914e, 0x3f88_1aaf_5c3c_237a_6301_d1e8_7581_c0d5),
    (0x3ffa_7745_8f63_2dcf_c463_4f2a_1ee4_a583, 0xbf87_c364_08fe_4d57_6273_4f82_98b2_145c),
    (0x3ffa_b42d_d711_971b_ec28_d14c_7d9f_6cdd, 0x3f87_4abc_e263_40fc_53dc_9e77_778b_ea9e),
    (0x3ffa_f0a3_0c01_162a_6617_cc97_16ee_b32f, 0x3f86_31a6_8e9a_66eb_6a4b_2ce3_0a3e_152e),
    (0x3ffb_1653_6eea_37ae_0e86_25c1_73dd_325e, 0x3f89_1b69_0a41_699a_169a_ab4d_f9b2_e20a),
    (0x3ffb_341d_7961_bd1d_0929_9837_6104_d137, 0x3f89_4086_83b2_96de_119e_5439_840e_2017),
    (0x3ffb_51b0_73f0_6183_f692_78e6_86a2_f916, 0xbf89_ed0d_8e07_d90f_07bc_851a_5a7b_a6a1),
    (0x3ffb_6f0d_28ae_56b4_b9be_499b_9ed1_9b64, 0x3f86_9ca1_83de_ca10_ffbe_4702_5e71_4069),
    (0x3ffb_8c34_5d63_19b2_0f5a_cb42_a65e_dab4, 0x3f88_ab81_301f_206b_e262_5a3c_ce99_e800),
    (0x3ffb_a926_d3a4_ad56_3650_bd22_a9c3_aa4c, 0x3f89_e6a7_d9f8_8bb4_e634_077a_ac47_e90a),
    (0x3ffb_c5e5_48f5_bc74_315d_617e_f816_1b17, 0x3f89_a765_9abe_370d_dcb2_b045_8f9f_db2f),
    (0x3ffb_e270_76e2_af2e_5e9e_a87f_fe1f_e9e1, 0x3f89_576e_53af_1005_fdbe_55f7_4225_f080),
    (0x3ffb_fec9_131d_beab_aaa2_e519_9f93_24e4, 0xbf89_005b_8751_5fb7_f44e_7ab6_3676_b271),
    (0x3ffc_0d77_e7cd_08e5_9669_7717_a40c_2ae9, 0xbf88_dbd9_a581_397e_3cf8_83bf_9c74_bcba),
    (0x3ffc_1b72_ad52_f67a_0290_6046_8e59_ae74, 0xbf87_8870_26f6_6acd_13ed_592b_f91f_1b9a),
    (0x3ffc_2955_2f81_ff52_34c0_5dc7_101f_6fa7, 0xbf8a_dec0_86df_1e10_3ac0_8a59_3f81_bb24),
    (0x3ffc_371f_c201_e8f7_43bc_d96c_55e3_13f9, 0x3f8a_d03e_64db_54ea_5206_53ee_89ca_9fbc),
    (0x3ffc_44d2_b6cc_b7d1_e67d_3d95_0f87_e1e1, 0xbf89_df4d_419b_a2c2_7d56_c1fd_27f5_f87f),
    (0x3ffc_526e_5e3a_1b43_7a2e_401d_6e3c_b19a, 0x3f8a_b6f3_18ed_5111_550e_62f6_29ef_9b55),
    (0x3ffc_5ff3_070a_793d_3c87_3e20_a072_123c, 0xbf8a_4065_5471_9540_4183_39c7_ea60_2525),
    (0x3ffc_6d60_fe71_9d21_c8d5_4765_c4cb_a1bc, 0x3f8a_bed1_92c1_2e71_b583_ddc9_d1b6_d993),
    (0x3ffc_7ab8_9021_0d90_91be_36b2_d6a0_6080, 0x3f8a_91ff_8525_3620_42ca_d5d8_c597_40ef),
    (0x3ffc_87fa_0652_0c91_0902_0090_17dc_9978, 0xbf8a_4b55_1f69_2902_9628_2bae_b265_a660),
    (0x3ffc_9525_a9cf_456b_4764_1307_538b_8967, 0x3f8a_8994_17da_79ee_2ecd_28e2_7b54_33db),
    (0x3ffc_a23b_c1fe_2b56_3193_711b_07a9_98c2, 0x3f8a_f8fc_6d9b_62cc_b798_7013_3e55_5638),
    (0x3ffc_af3c_94e8_0bff_2d8c_e601_937c_cf5d, 0xbf8a_1312_c8e8_cb45_5e6b_d6b1_3ba2_9b40),
    (0x3ffc_bc28_6742_d8cd_629f_9ce8_90e1_ea9e, 0x3f88_e2c3_dca4_6c83_cd6d_19e5_e9a9_0189),
    (0x3ffc_c8ff_7c79_a9a2_1ac2_5d81_ef2f_fb9a, 0x3f89_2571_d97a_9d04_6b70_6c5c_3c4c_fd59),
    (0x3ffc_d5c2_16b4_fbb9_15b9_10d6_5f93_5007, 0x3f87_e367_3d12_bf9c_6975_2dcc_d07c_f7f3),
    (0x3ffc_e270_76e2_af2e_5e9e_a87f_fe1f_e9e1, 0x3f8a_576e_53af_1005_fdbe_55f7_4225_f080),
    (0x3ffc_ef0a_dcbd_c593_6521_8de5_4370_8321, 0x3f8a_3eb4_a130_d074_8f87_4794_b069_4343),
    (0x3ffc_fb91_86d5_e3e2_a8d5_5466_c379_4d2d, 0xbf8a_7db7_f4f7_7549_ba6f_d09d_3411_6553),
    (0x3ffd_0402_594b_4d04_0dae_27bd_0b5f_ba58, 0xbf8b_bbb8_99f3_43f1_05ee_37ca_fa25_67ab),
    (0x3ffd_0a32_4e27_390e_35f7_3f7a_0187_00c4, 0xbf8b_d721_fca5_041f_68d2_1c92_21c5_e238),
    (0x3ffd_1058_bf9a_e4ad_5189_fa0a_b4cb_31d0, 0xbf8b_eb31_a746_40ec_6ed4_b2c1_ce69_a09d),
    (0x3ffd_1675_caba_ba60_e039_cc7d_5710_6e2e, 0x3f88_1f83_3e82_521e_0cfa_9a61_e46e_1ccb),
    (0x3ffd_1c89_8c16_999f_afbc_68e7_5403_8eef, 0x3f88_9dc4_1775_af65_7aec_9b25_5655_bdd8),
    (0x3ffd_2294_1fbc_f796_5a24_2853_da75_d433, 0xbf88_68b2_a964_2c3c_4e8c_5c0e_c4d6_8002),
    (0x3ffd_2895_a13d_e86a_35eb_4930_4fc1_0396, 0x3f8a_6b51_d565_f2c2_bd5b_f133_b6b2_d31b),
    (0x3ffd_2e8e_2bae_11d3_09c2_cc91_a850_81b4, 0xbf8a_9091_0a52_09bb_21d5_bd96_61b3_155a),
    (0x3ffd_347d_d9a9_87d5_4d64_5674_fedc_c10f, 0x3f8b_ca21_4b01_6766_1dea_ff07_944f_cf1d),
    (0x3ffd_3a64_c556_945e_9c72_f35c_d740_d08e, 0xbf88_485c_3118_1fd6_1b91_eccb_201b_9831),
    (0x3ffd_4043_0868_6a7e_3bd0_c127_df4c_64a6, 0x3f89_5906_09f6_7646_8b68_353c_881b_2566),
    (0x3ffd_4618_bc21_c5ec_27d0_b7b3_7b33_c734, 0x3f8b_0577_2cd2_4c00_b443_93cb_5eeb_55cb),
    (0x3ffd_4be5_f957_778a_0db4_c994_9f6f_d864, 0x3f8b_eb95_3458_673d_2f05_3f56_b656_8786),
    (0x3ffd_51aa_d872_df82_d09c_93d6_0cfa_af19, 0xbf8b_c561_6195_0680_a3ed_41de_065a_3a51),
    (0x3ffd_5767_7174_55a6_c549_ab6c_a0d9_82f4, 0x3f86_f170_6866_327e_f7c0_5062_8f2d_55f1),
    (0x3ffd_5d1b_dbf5_809c_a508_d8e0_f71f_f845, 0x3f8b_9f38_0b4a_6b42_9a4b_b094_df9c_bb76),
    (0x3ffd_62c8_2f2b_9c79_52f6_f5f2_2a60_1ca3, 0xbf89_8dd9_3aa2_2da8_0bb4_affd_3733_0c2c),
    (0x3ffd_686c_81e9_b14a_ec44_2be1_014e_3869, 0x3f8b_92de_ded1_c339_5996_523f_a9ae_6167),
    (0x3ffd_6e08_eaa2_ba1e_38c1_3931_8d71_7c2f, 0x3f86_8b57_3e9c_cb03_ee11_b30a_decd_3f7e),
    (0x3ffd_739d_7f6b_bd00_69ce_24c5_3fad_3ef8, 0xbf8b_a552_21ef_2315_a68a_8444_36d8_7b2e),
    (0x3ffd_792a_55fd_d47a_27c1_5da4_7fa7_b5a0, 0x3f8b_59fc_32ef_1838_fd7b_d5ea_6f52_61c4),
    (0x3ffd_7eaf_83b8_2afc_364b_3a5e_7b4a_5411, 0xbf8a_1d3e_6806_811c_22e5_6986_5f31_3334),
    (0x3ffd_842d_1da1_e8b1_7493_b146_5e11_9d9a, 0x3f8a_1e08_c28e_3e70_1f2b_da64_ee7a_8ce8),
    (0x3ffd_89a3_386c_1425_ab5a_7188_1103_c157, 0xbf8a_8007_39af_c97f_5d4b_9c15_fc11_8c67),
    (0x3ffd_8f11_e873_662c_77e1_769d_5698_68a6, 0x3f8b_79cb_fcbc_0e45_410e_e8ca_0d17_3fb9),
    (0x3ffd_9479_41c2_116f_aba4_cdd1_47d1_06eb, 0xbf89_5b58_cf68_8d7c_1796_0733_9873_4cf1),
    (0x3ffd_99d9_5811_7e08_acba_92ee_c478_31bf, 0x3f8b_d25d_b8e4_afa2_5191_2dae_c7c7_be14),
    (0x3ffd_9f32_3ecb_f984_bf2b_68d7_66f4_0522, 0x3f89_819f_483f_ecd1_51f5_f0ac_e2b5_e3b1),
    (0x3ffd_a484_090e_5bb0_a2bf_ca6b_70eb_4e93, 0xbf8a_b18a_42bc_e527_284b_ae5f_9aed_57a0),
    (0x3ffd_a9ce_c9a9_a084_98d4_84ff_52f2_5436, 0xbf89_07b8_0dc4_7662_5cee_c583_2956_5922),
    (0x3ffd_af12_9324_7786_b113_3844_a15d_c281, 0xbf8a_e3b2_fb68_378f_9b7a_a0ef_6685_4d78),
    (0x3ffd_b44f_77bc_c8f6_28cb_eeda_ae98_e1e4, 0xbf8b_0dfa_c54b_2f79_fc30_eee5_576d_f4ed),
    (0x3ffd_b985_8969_310f_b598_fb14_f88e_f0e8, 0xbf8b_0df8_c54b_9dfd_fafa_4fb3_6a0b_ff6a),
    (0x3ffd_beb4_d9da_71b7_bf78_61d3_7abb_c1ad, 0xbf8b_a4ad_3e41_effd_cc4c_d6b6_d08b_2e15),
    (0x3ffd_c3dd_7a7c_dad4_d73b_3c14_b7a9_a6d8, 0x3f8a_76a3_1caf_b028_133f_cf3a_57ad_a0fe),
    (0x3ffd_c8ff_7c79_a9a2_1ac2_5d81_ef2f_fb9a, 0x3f8a_2571_d97a_9d04_6b70_6c5c_3c4c_fd59),
    (0x3ffd_ce1a_f0b8_5f3e_b7b7_d2bc_aad0_99d2, 0x3f8b_c431_9180_165e_de56_4733_0f22_57a7),
    (0x3ffd_d32f_e7e0_0ebd_561d_ec8c_bebe_8dbf, 0x3f8b_18ab_4dff_5efd_6e58_3ff1_279a_ed90),
    (0x3ffd_d83e_7258_a2f3_e505_15ba_2ec9_4444, 0xbf8b_5af6_b33e_7db8_8142_7fca_f7ff_2b8d),
    (0x3ffd_dd46_a04c_1c4a_0bee_626a_49d1_db88, 0xbf87_60af_97b3_1945_0302_a6da_f009_66a3),
    (0x3ffd_e248_81a7_c6c2_61cb_d8f4_5954_a463, 0x3f8b_8a80_7be2_ec9c_3da4_32c8_750a_8cad),
    (0x3ffd_e744_261d_6878_7e37_da36_f3cb_b46f, 0xbf8a_7f6b_ce3a_ab42_3fd5_dbea_d527_8e1d),
    (0x3ffd_ec39_9d24_68cc_0175_cee5_3f35_3970, 0xbf89_3dda_340d_7c50_9c6b_bb19_993b_fc37),
    (0x3ffd_f128_f5fa_f06e_cb35_c83b_1131_cf5d, 0x3f8b_cf56_4911_7429_ec74_7b1e_a5ce_16ba),
    (0x3ffd_f612_3fa7_028a_c614_56c3_cb6c_d052, 0x3f89_9512_0a66_0582_4e07_db9d_a6ed_0ce1),
    (0x3ffd_faf5_88f7_8f31_ed9a_fb3e_4ea8_6bfb, 0x3f89_b533_78bb_c613_71ed_b98d_2e84_0bbf),
    (0x3ffd_ffd2_e085_7f49_8559_7d03_64c8_6bc9, 0x3f89_b8cd_e74f_a9a3_8a61_9ace_ce2b_8ec6),
    (0x3ffe_0255_2a5a_5d0f_ec69_c695_d7ee_7ffc, 0x3f8c_a372_5c5c_6261_a75d_c4f5_12ac_8e7f),
    (0x3ffe_04bd_f9da_926d_265f_cc10_08b2_77db, 0xbf8c_92f7_1bb8_f0ef_38fa_c0fb_0e20_4669),
    (0x3ffe_0723_e5c1_cdf4_04e5_7963_8911_6eab, 0x3f8c_95bd_2eba_9089_087b_ae74_0508_a1cd),
    (0x3ffe_0986_f4f5_7352_0b91_fda9_4ff4_3fc0, 0x3f8c_c089_f89a_d131_c4f8_9e25_ef1c_da55),
    (0x3ffe_0be7_2e42_52a8_2b69_897b_b33d_ffcd, 0x3f8b_b643_66fb_bf35_d3ed_11a9_0936_f50c),
    (0x3ffe_0e44_985d_1cc8_bf6e_ae5d_e969_63e3, 0x3f8c_1fba_cf70_a2da_185e_8485_9e35_d6f0),
    (0x3ffe_109f_39e2_d4c9_6fde_3ec9_b0b7_918c, 0xbf8a_b7d3_8320_cdf0_36a3_d8eb_bf1a_702d),
    (0x3ffe_12f7_1959_3efb_c530_1231_9c7d_0d4b, 0x3f8c_1276_4eaf_ea02_466f_35d9_a28f_70ab),
    (0x3ffe_154c_3d2f_4d5e_9a98_f33a_3965_e281, 0xbf8c_5896_2e67_865f_1870_288e_c900_b570),
    (0x3ffe_179e_abbd_899a_0bfc_60e6_fa07_d2e2, 0xbf8c_538e_413c_dc4f_5c1c_95bd_20ef_fc4e),
    (0x3ffe_19ee_6b46_7c96_ecc5_cbdd_7781_de7b, 0xbf8c_477c_38af_c9e9_e471_6480_b389_b253),
    (0x3ffe_1c3b_81f7_13c2_4bc9_4f8e_cdfb_c5e0, 0xbf8c_c405_9ee4_3268_8391_8e43_f553_56d4),
    (0x3ffe_1e85_f5e7_040d_03de_c59a_5f3e_3c6c, 0xbf8a_a306_b616_fd12_d2a5_8c0c_b69c_7f35),
    (0x3ffe_20cd_cd19_2ab6_d935_03d0_f75b_fb09, 0x3f8b_e894_81a9_1283_b527_cbab_eeaf_facd),
    (0x3ffe_2313_0d7b_ebf4_282d_e368_722c_a481, 0x3f8c_238d_e6fe_60fa_d863_6302_d4f8_4984),
    (0x3ffe_2555_bce9_8f7c_b3c0_43ad_ad10_3ce2, 0x3f8a_08ea_140d_d660_35d0_611f_d942_1e87),
    (0x3ffe_2795_e128_9b11_aeb7_83f3_db96_8720, 0xbf88_fe56_c146_7b5e_6221_05c5_e414_cd31),
    (0x3ffe_29d3_7fec_2b08_ac85_cd6c_ba5c_cfb7, 0xbf8c_1798_1f05_534c_af7a_acc6_62db_8d87),
    (0x3ffe_2c0e_9ed4_48e8_bb97_a9c3_1ba2_9e62, 0x3f8c_5205_2a37_c215_ba28_cb69_6c1d_6214),
    (0x3ffe_2e47_436e_4026_8405_4218_6922_1ab1, 0x3f8b_2967_94a2_9644_75e2_e717_9b79_1964),
    (0x3ffe_307d_7334_f10b_e1fb_590a_1f56_6d9c, 0xbf8b_1e7f_48fe_ccc7_ee64_56eb_fbdf_763a),
    (0x3ffe_32b1_3391_21d7_1320_556b_67b2_2d61, 0xbf8b_8ea4_5ecc_b9d2_206b_4219_4c5a_b85b),
    (0x3ffe_34e2_89d9_ce1d_316e_b92d_885c_e4eb, 0xbf8a_b59c_4405_8fa9_2837_dec7_1350_da4c),
    (0x3ffe_3711_7b54_747b_5c5d_d024_844d_df92, 0xbf89_da9c_99e4_f5fa_4f26_cbcf_bbd6_1b75),
    (0x3ffe_393e_0d35_62a1_9a9c_4426_036d_f187, 0x3f8a_ec42_e2f9_3ce0_0826_4c08_3cf5_08a4),
    (0x3ffe_3b68_449f_ffc2_2af8_edec_1859_3668, 0x3f8b_d6de_6d9b_9591_a547_90d2_9adc_2b4d),
    (0x3ffe_3d90_26a7_156f_aa40_4263_d0ad_279f, 0xbf8b_47f6_2696_ab52_0e00_6c9f_42fc_4ef1),
    (0x3ffe_3fb5_b84d_16f4_25b4_e9d5_05ca_bbbd, 0xbf8b_37b1_30cc_534b_48d4_b068_ee97_23e4),
    (0x3ffe_41d8_fe84_672a_e646_4bcc_2f46_0178, 0xbf8c_ab1d_dbc8_aec5_4853_345e_dc1f_a3df),
    (0x3ffe_43f9_fe2f_9ce6_77a7_27b9_b60e_e197, 0xbf8b_3e44_88b3_d018_3199_ee51_dc51_e959),
    (0x3ffe_4618_bc21_c5ec_27d0_b7b3_7b33_c734, 0x3f8c_0577_2cd2_4c00_b443_93cb_5eeb_55cb),
    (0x3ffe_4835_3d1e_a88d_f73d_5e8b_b301_fd09, 0x3f8c_860f_7df3_c19b_a9ae_5393_6ce0_3896),
    (0x3ffe_4a4f_85db_03eb_b022_7bf4_7a6e_c36c, 0x3f8c_8b73_7b8c_8ec5_7a3f_3a22_df8d_3364),
    (0x3ffe_4c67_9afc_cee3_9b16_8ecd_d318_6fd8, 0x3f8c_9db0_d889_bbe3_8f55_9618_dbd2_a535),
    (0x3ffe_4e7d_811b_75bb_09cb_0985_6458_55dc, 0x3f8b_a18b_d794_408f_7745_93dc_9ea4_c643),
    (0x3ffe_5091_3cc0_1686_b4bc_b3a5_b0b5_6c3e, 0xbf8c_686e_3093_ab3b_1a26_90e2_a7b0_fdec),
    (0x3ffe_52a2_d265_bc5a_aee7_7c8a_f15b_2f5d, 0x3f8c_3df6_8490_7b52_61cd_98f5_1c45_b199),
    (0x3ffe_54b2_4679_9949_7a91_5428_b43d_82f3, 0xbf8b_76ba_2a95_08eb_1454_a066_e918_694c),
    (0x3ffe_56bf_9d5b_3f39_9411_c621_7363_fcb4, 0xbf8c_91f5_4e72_051e_57b5_d75d_6963_20ff),
    (0x3ffe_58ca_db5c_d798_9309_2f25_d930_8b0b, 0xbf8c_761c_ff2a_6a51_ddc9_c241_881c_6855),
    (0x3ffe_5ad4_04c3_59f2_cfb2_9aaa_5f02_39a8, 0x3f8a_08b0_73c0_8af0_2c39_9eee_ea76_790b),
    (0x3ffe_5cdb_1dc6_c176_48cf_6e3c_5d70_8316, 0xbf8a_3fb5_ea39_ae29_e48d_e0f1_afda_4ac6),
    (0x3ffe_5ee0_2a92_4167_570d_6095_fd24_207e, 0xbf8a_673a_c1f6_a363_0bad_9ec3_32ef_dfb6),
    (0x3ffe_60e3_2f44_788d_8ca7_c895_a0b4_ecab, 0xbf8c_e657_418e_4529_9aaa_07ab_4ff6_ab8a),
    (0x3ffe_62e4_2fef_a39e_f357_93c7_6730_07e6, 0xbf8a_2a17_e197_9b31_ace9_3a4e_be5d_148f),
];

pub(crate) static LOG2_TABLE: [(u128, u128); 129] = [
    (0x0000_0000_0000_0000_0000_0000_0000_0000, 0x0000_0000_0000_0000_0000_0000_0000_0000),
    (0x3ff8_6fe5_0b6e_f085_17f8_e37b_0017_94f4, 0x3f86_1073_37d9_23c9_9690_795f_5d59_0878),
    (0x3ff9_6e79_685c_2d22_98a6_e27e_2118_10b0, 0xbf87_ae7d_5a24_3491_2ad3_fe21_cfa9_4d86),
    (0x3ffa_11cd_1d51_3341_2ed8_1450_4fa9_3475, 0x3f87_79b5_7fee_a297_d30b_994d_5129_72be),
    (0x3ffa_6bad_3758_efd8_7313_606f_096b_7c11, 0xbf88_b7ce_4c86_d28e_4be3_31fc_e168_eaf0),
    (0x3ffa_c4df_ab90_aab5_ef4f_8f86_9e63_b883, 0xbf88_ea16_a73e_812a_9e45_6548_1eb4_6276),
    (0x3ffb_0eb3_89fa_29f9_ab3c_f74b_ab99_9217, 0x3f85_9ae4_543c_f1f7_7488_d45e_f9ae_03eb),
    (0x3ffb_3aa2_fdd2_7f1c_2d80_4d11_21b4_a627, 0x3f89_a9b5_2342_f8f1_76f1_7eee_a2d8_ba5f),
    (0x3ffb_663f_6fac_9131_67cc_c538_2614_4576, 0xbf89_4f0d_6be0_c153_8b60_19ed_b6ed_ed80),
    (0x3ffb_918a_16e4_6335_aae7_2324_94db_3a3a, 0x3f88_9046_b227_370f_7cb8_6bd9_e3e2_d3b3),
    (0x3ffb_bc84_240a_dabb_a63b_2c5a_6e51_97ac, 0xbf89_e1a6_f8eb_dfbc_711f_7cd5_957e_720c),
    (0x3ffb_e72e_c117_fa5b_21cb_db5d_9dc2_9f20, 0x3f89_3a95_0ee2_d9c2_5b46_278f_3346_82e7),
    (0x3ffc_08c5_88cd_a79e_3962_7bc6_fd0a_5529, 0xbf8a_50ac_3100_57e3_f7fc_5f5f_a9e4_fc0b),
    (0x3ffc_1dcd_1975_52b7_b5ea_4543_0783_9615, 0x3f8a_d6a1_f752_2ad0_6927_550c_4712_9d6f),
    (0x3ffc_32ae_9e27_8ae1_a1f5_1f2c_075a_74ba, 0x3f8a_9365_4fc4_b131_bba4_6eca_bce1_1e91),
    (0x3ffc_476a_9f98_3f74_d313_8e94_1643_f6c1, 0x3f89_f756_d9e3_e274_4540_08c8_6b50_a35a),
    (0x3ffc_5c01_a39f_bd68_79fa_00b1_20a0_68bb, 0xbf89_176d_860c_ae2e_d327_dfc2_0d37_d96d),
    (0x3ffc_7074_2d4e_f027_f29c_01cf_ad77_e7b7, 0xbf8a_75b2_8ecb_731e_5069_77d3_237b_1fc1),
    (0x3ffc_84c2_bd02_f03b_2fdd_2248_ee76_3a95, 0x3f8a_c3df_5b2e_d2bf_6ff7_34c9_3d86_85fb),
    (0x3ffc_98ed_d077_e70d_f02f_ace8_ca91_72b8, 0xbf87_a069_7ece_cc5a_c380_2a0c_6e23_77a0),
    (0x3ffc_acf5_e2db_4ec9_3efe_11ec_bc01_8363, 0x3f8a_2d48_20af_ba85_0fc4_5e2a_bd89_9485),
    (0x3ffc_c0db_6cdd_94de_e40e_26d9_899c_fef4, 0x3f89_af60_920a_e6d2_916a_99d3_306a_cd1d),
    (0x3ffc_d49e_e4c3_2596_fc8f_4b56_5023_a054, 0x3f8a_06fe_0ad2_d2ab_fee3_56a1_335e_8a28),
    (0x3ffc_e840_be74_e6a4_cc7c_9f3d_51de_fc38, 0x3f89_f93d_559e_9f40_35d8_2f03_618b_8806),
    (0x3ffc_fbc1_6b90_2680_a23a_8d99_8a78_4ef3, 0x3f8a_7c93_3d5b_b6b5_2a41_ad56_7d8e_23af),
    (0x3ffd_0790_adbb_0300_96f0_31a6_99d5_45bb, 0xbf8a_333d_78f6_b7c1_2f43_fcd7_e212_e377),
    (0x3ffd_1130_7dad_30b7_5cb0_9705_a795_a4ea, 0xbf86_f311_8c9e_017b_001d_b373_a478_0ad0),
    (0x3ffd_1ac0_5b29_1f07_0528_c738_6df8_ca1a, 0x3f87_876c_7349_cb4b_3fbd_acff_96ee_d64c),
    (0x3ffd_2440_7ab0_e073_9824_5b94_ba44_c03c, 0xbf87_10be_1795_89cd_9fd8_f7ec_c4cb_026c),
    (0x3ffd_2db1_0fc4_d9aa_f6f1_37a3_d8c6_f3ce, 0xbf8a_c471_d31f_d1d0_6ec7_dbea_9ca4_fb1e),
    (0x3ffd_3712_4cea_4cde_cd99_1336_c960_7ee4, 0x3f8b_86e4_1376_f461_2d4b_0b9a_507d_16c1),
    (0x3ffd_4064_63b1_b044_975b_2f34_4252_3352, 0x3f8b_7bce_401e_28a8_e592_d7b9_d8a1_b360),
    (0x3ffd_49a7_84bc_d1b8_afe4_92bf_6ff4_dafe, 0xbf8b_2cc9_a4ea_8072_1314_ac5b_9254_dfdf),
    (0x3ffd_52db_dfc4_c96b_37dc_f60e_61fc_9b53, 0xbf8a_a211_021e_1b52_5598_cd22_ccac_7ef7),
    (0x3ffd_5c01_a39f_bd68_79fa_00b1_20a0_68bb, 0xbf8a_176d_860c_ae2e_d327_dfc2_0d37_d96d),
    (0x3ffd_6518_fe46_77ba_6e52_278e_dc89_e988, 0x3f8b_d2d1_7e2d_5cc6_7da3_6bf4_e367_7d35),
    (0x3ffd_6e22_1cd9_d0cd_e578_d520_b44f_703c, 0x3f8b_10c9_f890_5032_85f6_d81a_3d71_f97f),
    (0x3ffd_771d_2ba7_efb3_be46_fecd_5122_4a80, 0xbf8a_c786_dcf6_b587_b922_2536_5d03_fa7a),
    (0x3ffd_800a_5631_61c5_432a_eb60_9f4d_f7ad, 0xbf8b_dc9e_84e4_06db_6571_ed2c_7a38_8706),
    (0x3ffd_88e9_c72e_0b22_5a4b_664a_4c8d_a9bb, 0xbf8b_3bc1_3892_380c_d039_8906_2763_4103),
    (0x3ffd_91bb_a891_f170_8b4b_2b50_56b8_69c5, 0x3f8b_6185_dba8_beba_3cb1_80b3_7bbb_66ac),
    (0x3ffd_9a80_2391_e232_f34b_b6d0_e439_4c1b, 0xbf8b_dc3c_616f_85ad_ff31_270d_154b_69f2),
    (0x3ffd_a337_60a7_f605_09d7_c40d_7979_ec5b, 0x3f89_fdcc_0075_3ce4_284d_34a3_ffbe_9302),
    (0x3ffd_abe1_8797_f1f4_8e1a_4725_558c_5bd7, 0x3f89_e1b8_f4aa_bf3b_815b_7aea_ede4_6df1),
    (0x3ffd_b47e_bf73_882a_0a41_46ef_8fd8_a279, 0xbf89_523a_d5fe_846f_639a_00f3_0db8_f23a),
    (0x3ffd_bd0f_2e9e_7903_0ab4_42ce_3201_16c3, 0xbf8b_d65b_ba05_2499_f07b_dee0_94f6_94cb),
    (0x3ffd_c592_fad2_95b5_67e7_ee54_aeef_330c, 0x3f8b_4f02_acc3_311d_107a_f479_bef0_54d1),
    (0x3ffd_ce0a_4923_a587_cc95_d0a2_ee7a_0592, 0x3f88_5702_14aa_9cdf_8769_1fa4_c5c5_10da),
    (0x3ffd_d675_3e03_2ea0_efe3_ebe1_9905_5553, 0x3f8b_6bf3_e730_bb74_10e8_95b8_a579_ddd0),
    (0x3ffd_ded3_fd44_2364_c4eb_b196_115f_1035, 0xbf8b_1366_9dd0_9161_6f03_10f0_9258_4c26),
    (0x3ffd_e726_aa1e_754d_20c5_19e1_2f47_1133, 0x3f8a_abd1_46eb_d4ea_2af2_ed7a_4148_c62a),
    (0x3ffd_ef6d_6732_8e22_07d1_e01a_8390_4124, 0x3f89_fe73_376d_4fb6_2311_f1f5_e531_5b81),
    (0x3ffd_f7a8_568c_b06c_ece1_9318_0045_0f5b, 0x3f8a_1ab5_f324_a804_7042_b767_d4ba_538b),
    (0x3ffd_ffd7_99a8_3ff9_ab9c_c7f3_42f8_b862, 0x3f8a_62f6_956c_2323_219a_219d_cdad_f483),
    (0x3ffe_03fd_a8b9_7997_f339_4346_4056_7ad2, 0xbf89_a6aa_9135_b95b_a208_5b6b_350d_4c7d),
    (0x3ffe_0809_cf27_f703_d525_b3c1_d158_3ea4, 0xbf8b_e8f3_34f0_889e_1a00_646c_7ab1_857c),
    (0x3ffe_0c10_500d_63aa_6588_2575_29b6_25de, 0x3f8a_5507_e50d_3bad_7c3a_3985_b88e_bd55),
    (0x3ffe_1011_3b15_3c8e_a7b1_cdda_e6fa_ce58, 0xbf8c_4b12_ca49_5197_c599_3ea3_19c8_0ace),
    (0x3ffe_140c_9faa_1e54_39e1_5a52_a316_04a6, 0xbf8c_eed6_a251_3c4f_89aa_3a66_5af1_96f5),
    (0x3ffe_1802_8cf7_2976_a4eb_8e97_d145_3358, 0x3f8c_8c18_461c_458f_9708_479e_9bdf_3138),
    (0x3ffe_1bf3_11e9_5d00_de3b_513a_9dcc_d86e, 0x3f86_c7d5_8d55_65c1_df14_cfcc_a609_3ca0),
    (0x3ffe_1fde_3d30_e812_6424_15d4_7384_4f11, 0x3f8c_8dd5_3d12_c997_43f3_c461_7c36_b828),
    (0x3ffe_23c4_1d42_727c_8080_ecc6_1a98_813c, 0xbf8c_3740_031e_528b_bef9_ead8_29c6_e704),
    (0x3ffe_27a4_c058_5cbf_8057_84ee_0e3a_e9f4, 0xbf8c_4570_3d2c_5dcb_d9cc_c4a8_5fb7_f8ad),
    (0x3ffe_2b80_3473_f7ad_0f3f_4016_2414_0d17, 0x3f8c_6e89_279f_351d_12cd_8203_df2c_8269),
    (0x3ffe_2f56_875e_b3f2_6142_78cd_1699_3119, 0xbf8c_166f_e5d8_76b1_e73c_7de4_70e1_4a4b),
    (0x3ffe_3327_c6ab_49ca_6c86_b920_5fa4_2202, 0x3f8a_273c_ddb8_0c17_f008_b3bb_1019_90c9),
    (0x3ffe_36f3_ffb6_d916_2404_772a_151c_cd9d, 0xbf8b_3dd5_8663_d90e_ed12_3bda_5ea1_9006),
    (0x3ffe_3abb_3faa_0216_6ccc_ab24_0e90_4f97, 0xbf8c_7b8c_7395_ab7f_e8e9_8354_429d_9e26),
    (0x3ffe_3e7d_9379_f701_66ae_2a7a_da55_2c6d, 0x3f8b_ad81_817b_fedd_ee4a_9632_0fd3_37db),
    (0x3ffe_423b_07e9_86aa_9670_761d_14aa_c4d8, 0x3f8c_930c_42d6_c7f4_2e0f_4ee4_1115_f3ba),
    (0x3ffe_45f3_a98a_2073_8a4d_7ffe_0267_2eab, 0xbf8c_f1c4_520b_b07b_df28_be43_1ca9_6e0c),
    (0x3ffe_49a7_84bc_d1b8_afe4_92bf_6ff4_dafe, 0xbf8c_2cc9_a4ea_8072_1314_ac5b_9254_dfdf),
    (0x3ffe_4d56_a5b3_3cec_44a6_deff_9987_3f5a, 0x3f8b_e37d_e08f_5e02_036d_2759_3a3f_bce2),
    (0x3ffe_5101_1870_8a8f_8dde_9493_78b2_2692, 0xbf8a_d756_2e6d_8cb3_fb5a_9967_2734_957a),
    (0x3ffe_54a6_e8ca_5438_db1b_0ca6_3aab_b43a, 0x3f8a_ecc7_d3de_36c6_03ec_da3b_7bf3_63b1),
    (0x3ffe_5848_2269_89d3_3c38_d8bd_28d6_95c6, 0x3f8a_129d_e88c_73ca_8585_fb18_a13b_12e5),
    (0x3ffe_5be4_d0cb_5143_4aae_b3f0_1222_259d, 0xbf87_bffa_c5a3_03f8_d1dd_4415_4e2e_6608),
    (0x3ffe_5f7c_ff41_e09a_eb8c_b1ac_05cc_d60a, 0xbf8c_6250_6e4f_bd97_14b8_0fbb_402d_aaee),
    (0x3ffe_6310_b8f5_5304_8406_a5a1_71de_400d, 0xbf8b_9b57_6efc_8db4_f6ac_db2d_a706_97b1),
    (0x3ffe_66a0_08e4_788c_bcd2_edb4_390e_5307, 0xbf8c_770f_185b_e16b_7fcc_49c3_4552_da7d),
    (0x3ffe_6a2a_f9e5_a0f0_a080_9957_2f20_be67, 0xbf8c_eae1_3d10_b498_acfb_49ce_0ddf_882c),
    (0x3ffe_6db1_96a7_6194_9d97_df07_e356_a262, 0xbf8c_e5a1_e4a0_e0db_eb31_95d4_0b4c_bc9a),
    (0x3ffe_7133_e9b1_56c7_be51_67fb_dc81_3727, 0xbf8c_0c74_9c1a_6f5a_fa47_381e_7d3c_5ed1),
    (0x3ffe_74b1_fd64_e075_3c6e_5783_fd15_0c92, 0xbf8b_6144_0f20_4191_4008_2c4d_e5b7_5173),
    (0x3ffe_782b_dbfd_da65_77bc_87e1_25ea_aa46, 0xbf89_64ec_237c_f4b3_f24b_124b_8cd9_af94),
    (0x3ffe_7ba1_8f93_502e_409e_ab77_f219_c7ed, 0x3f87_5b6f_f483_5615_edb5_a95f_38aa_d807),
    (0x3ffe_7f13_2218_2cf1_5d12_ecd7_7fe6_bebb, 0x3f8c_3f53_d2ca_ef39_0a02_69b3_d51e_71c9),
    (0x3ffe_8280_9d5b_e707_2dbd_c042_6c3c_2746, 0x3f8a_2e6d_db76_7d5c_e1a2_182e_7616_1cee),
    (0x3ffe_85ea_0b0b_27b2_6108_6fce_864a_1f59, 0x3f8c_e4d9_fc44_b8d3_6f13_81eb_a493_178f),
    (0x3ffe_894f_74b0_6ef8_b406_ea2c_7d91_aac5, 0xbf8c_e83a_0018_a214_69a1_f119_11ae_4dcf),
    (0x3ffe_8cb0_e3b4_b3bb_db36_88a8_5fb1_9bbd, 0xbf8c_207f_0195_1633_1134_b0c9_d171_dc18),
    (0x3ffe_900e_6160_002c_cfe4_3f50_847d_1829, 0xbf8c_e06a_dedc_e27f_0116_0b51_766d_8108),
    (0x3ffe_9367_f6da_0ab2_e9cc_865b_3dd0_dbb5, 0x3f8c_5f0f_3a28_066a_0ec7_b2ff_03cf_67d3),
    (0x3ffe_96bd_ad2a_cb5f_5efe_c491_5314_6df0, 0x3f8b_73b6_5f96_477c_ad7d_331d_1d1d_cf15),
    (0x3ffe_9a0f_8d3b_0e04_fde9_5734_abd2_fcc2, 0xbf8b_9ce2_7d2d_ca39_79bb_b0ca_9365_ee71),
    (0x3ffe_9d5d_9fd5_010b_3666_5592_0748_27cb, 0x3f8c_4239_c635_2a40_0b8b_3e55_deb1_30ed),
    (0x3ffe_a0a7_eda4_c112_ce63_12eb_b81c_f52c, 0x3f8c_b048_aa53_e9c8_1286_57ac_2c04_24f3),
    (0x3ffe_a3ee_7f38_e181_ed07_98d1_aa21_6945, 0x3f8c_84c9_dc56_27ac_1ab9_89c4_2834_11af),
    (0x3ffe_a731_5d02_f20c_7bd5_60a3_fee0_894d, 0x3f8a_4ff4_d4c7_f2ef_ff2f_c373_988a_af69),
    (0x3ffe_aa70_8f58_014d_37cd_e37c_86b2_20d4, 0x3f8b_9b5b_edec_4594_babb_dab2_fd20_16aa),
    (0x3ffe_adac_1e71_1c83_2d15_62d6_1af7_3f7f, 0x3f8c_4a4b_85dc_fd58_3be4_0564_8f13_cee5),
    (0x3ffe_b0e4_126b_cc86_bd7a_6ed4_e1b0_935d, 0xbf8a_048b_64c7_c536_a9ef_1f31_6c1b_0269),
    (0x3ffe_b418_734a_9008_bd97_8b98_f7de_df8c, 0x3f8c_66bc_e16c_bd17_26cd_0b36_109a_a23e),
    (0x3ffe_b749_48f5_532d_a4b4_b714_3363_8c6f, 0xbf8b_8e0f_a27b_391d_1520_0f8d_ff68_b001),
    (0x3ffe_ba76_9b39_e496_40ef_87ed_e14a_e8ca, 0x3f89_951c_9a37_6a45_4e30_f028_d943_f8a8),
    (0x3ffe_bda0_71cc_67e6_db51_6de0_8136_6d35, 0x3f8c_6603_36e2_88ce_a5ce_ba44_7906_2a56),
    (0x3ffe_c0c6_d447_c5dd_362d_9a9a_55c7_45ed, 0xbf8b_1e8a_f87f_d544_041c_05dd_2d24_95fa),
    (0x3ffe_c3e9_ca2e_1a05_5336_98b4_e49b_7b03, 0x3f86_f0e2_5e20_8c8d_6c3d_60f5_e9d5_e0ff),
    (0x3ffe_c709_5ae9_1e1c_760b_c9b1_88c4_4c8a, 0xbf8c_ce04_cea5_50b2_568c_f82e_f894_f236),
    (0x3ffe_ca25_8dca_9331_635f_ee39_0c0a_b07a, 0x3f88_8581_8b91_2159_a1f3_b182_7d37_33ce),
    (0x3ffe_cd3e_6a0c_a890_6c24_3749_114c_4aef, 0xbf8c_16ce_1725_598f_1deb_4d67_54ee_5844),
    (0x3ffe_d053_f6d2_6089_6731_8975_dc0e_7a96, 0x3f8b_b048_aa53_e9c8_1286_57ac_2c04_24f3),
    (0x3ffe_d366_3b27_f31d_5297_837a_db4a_d8e5, 0xbf8c_516b_3976_2a42_1334_5189_42a6_bfd6),
    (0x3ffe_d675_3e03_2ea0_efe3_ebe1_9905_5553, 0x3f8c_6bf3_e730_bb74_10e8_95b8_a579_ddd0),
    (0x3ffe_d981_0643_d661_4c3c_406e_b464_4175, 0xbf8b_aea4_73c7_ecdd_43f8_ebd9_4842_e7e4),
    (0x3ffe_dc89_9ab3_ff56_c5e6_73ab_ad44_318c, 0x3f8c_9cfd_3de8_8693_e032_4bc5_e37a_bad9),
    (0x3ffe_df8f_0208_6af2_c4be_f483_c68a_bd15, 0x3f8c_ee0e_b9f5_1447_0d8c_267d_f437_f1ea),
    (0x3ffe_e291_42e0_e014_01fb_aaa6_7e3b_c535, 0x3f8c_f6ee_23e7_5d36_55c8_ee10_fde5_7f29),
    (0x3ffe_e590_63c8_822c_e561_911a_9bac_66c3, 0x3f8c_e815_b6fb_0c41_cac4_2192_5a10_ae6f),
    (0x3ffe_e88c_6b36_26a7_2aa2_1a3c_7f01_f78e, 0x3f8b_4540_6c1f_1d26_c710_872b_8bc3_cd44),
    (0x3ffe_eb85_5f8c_a88f_b0d4_b5c6_73bb_08ee, 0xbf8c_7fc6_1ad2_ce50_9feb_7492_5def_c11a),
    (0x3ffe_ee7b_471b_3a95_07d6_dc1f_27ef_487d, 0xbf8c_c32e_775f_c0ab_1c9f_0289_5b7f_4fcf),
    (0x3ffe_f16e_281d_b763_03b2_1928_c215_f6bd, 0x3f8c_610d_4497_7973_c743_1b98_3574_1657),
    (0x3ffe_f45e_08bc_f065_54e4_d5be_4f70_41fa, 0x3f88_f4c1_5739_47a3_1264_25d9_d0a3_5bf5),
    (0x3ffe_f74a_ef0e_fafa_dd7a_1b65_f638_d088, 0xbf8b_e988_2648_a6b5_30fa_4d84_7e3e_c386),
    (0x3ffe_fa34_e117_7c23_3629_28b9_ed74_e7a9, 0x3f8b_1ea5_6b29_4b3a_012f_0df2_3b21_76b1),
    (0x3ffe_fd1b_e4c7_f2af_942b_221c_e0d1_0345, 0xbf8a_46f5_6148_8d19_a0a3_5d9e_836e_acda),
    (0x3fff_0000_0000_0000_0000_0000_0000_0000, 0x0000_0000_0000_0000_0000_0000_0000_0000),
];

pub(crate) static LOG10_TABLE: [(u128, u128); 129] = [
    (0x0000_0000_0000_0000_0000_0000_0000_0000, 0x0000_0000_0000_0000_0000_0000_0000_0000),
    (0x3ff6_bafd_4722_1ed2_665c_1ba9_48fc_2922, 0xbf84_0548_56a4_28ab_1af9_dc50_e90e_1672),
    (0x3ff7_b947_6a4f_cd10_ed89_b5a4_1710_b154, 0xbf84_b5a0_16d6_c1e1_18e7_0d0e_ed37_36b0),
    (0x3ff8_49b0_8514_4368_3ce1_bf0b_25e5_e9e6, 0x3f86_8353_9059_615e_c7f1_18f1_cf85_4c96),
    (0x3ff8_b5e9_08eb_1379_00f9_74ff_1b3d_2887, 0x3f86_0dea_5c79_a1f9_99d7_6136_366e_d8f5),
    (0x3ff9_10a8_3a84_46c7_7a11_80aa_f5fd_ec27, 0xbf87_59e0_67c1_8886_783f_2261_44f6_e5b5),
    (0x3ff9_45f4_f5ac_b8be_0776_9e25_e957_ad39, 0x3f87_4d8f_05dd_bd92_7514_dca0_7277_c2db),
    (0x3ff9_7adc_3df3_b1ff_81b9_8071_4c59_6a34, 0x3f85_27c9_4234_1015_2ff4_6e36_e73e_0a7a),
    (0x3ff9_af5f_92b0_0e60_fa6d_e0a6_da79_f329, 0xbf86_ae63_5508_3cbe_d2b2_5339_2c10_e581),
    (0x3ff9_e380_6acb_d058_f0d7_9f59_da21_9ab2, 0xbf87_1dc3_b92c_ac55_ac6e_07ff_d469_7c9f),
    (0x3ffa_0ba0_1a81_7000_02be_3a8a_489e_86d1, 0x3f88_1928_829b_fdf0_7d88_fdb5_963e_5ad3),
    (0x3ffa_2550_2c0f_c314_b801_dad7_ded4_65f2, 0xbf88_37b7_0e4e_52e7_02bd_01cd_34d8_5a14),
    (0x3ffa_3ed1_199a_5e42_5037_527d_747c_70fe, 0xbf87_8e73_7443_2691_2f10_c802_8952_c5fd),
    (0x3ffa_5823_8eeb_353d_a7bf_5153_dfa9_a670, 0x3f88_138c_b876_020a_04fb_9655_811e_ea75),
    (0x3ffa_7148_3427_d2a9_8ce1_e110_0601_c4ea, 0x3f87_0f7c_7a54_bd50_f373_86f9_6ca8_567c),
    (0x3ffa_8a3f_adeb_847f_393a_ed3e_7b64_2619, 0xbf87_66e2_7abe_cd1c_a53f_0f14_9232_f8ba),
    (0x3ffa_a30a_9d60_9efe_9c28_1982_d7df_7ae7, 0xbf88_b698_aac9_e0ec_0188_6140_0af9_fde0),
    (0x3ffa_bba9_a058_dfd8_41a9_796c_3448_988a, 0x3f87_03ee_2c34_0e4c_19a5_1282_1711_60fe),
    (0x3ffa_d41d_5164_facb_3a01_88eb_2101_0129, 0xbf85_2faa_29e0_b979_bcb0_2d1c_f011_2d02),
    (0x3ffa_ec66_47eb_5880_847d_0188_c2cd_4a0a, 0xbf82_a03c_0e35_9e3e_aa68_486d_56c9_8083),
    (0x3ffb_0242_8c1f_0801_5ea6_bc2b_c8c2_bb5e, 0xbf89_4153_0c38_887e_dc24_0023_5493_2266),
    (0x3ffb_0e3d_29d8_1165_e625_5961_8f23_3d03, 0x3f88_128f_90a0_d3db_1dc7_52ed_072a_5c9b),
    (0x3ffb_1a23_4455_0181_5c0c_de7a_7f05_896c, 0x3f87_82e9_a257_9df7_9420_efbe_421c_c44b),
    (0x3ffb_25f5_215e_b594_9df2_a5fb_46b8_b788, 0xbf89_2a99_a183_3c1b_22c9_8a7c_80c7_06f4),
    (0x3ffb_31b3_055c_4711_801b_420b_9b20_2edd, 0x3f88_002c_845c_3b12_7df2_5ba8_db5a_931a),
    (0x3ffb_3d5d_335c_5317_8caf_84eb_228e_3a3d, 0x3f89_eee7_3ffa_07f2_24e5_84f8_d500_e460),
    (0x3ffb_48f3_ed1d_f48f_b5e0_8483_b67f_4076, 0x3f87_415e_13d8_e48e_4ecd_0a8a_c221_2820),
    (0x3ffb_5477_7319_73e8_4879_0c13_ee24_28aa, 0x3f86_df1f_05b9_9883_384c_1e39_f2c9_6a47),
    (0x3ffb_5fe8_0488_af4f_ca92_54c0_c63a_2b6f, 0xbf88_ad84_7f47_aff8_ba9d_c117_e1af_307a),
    (0x3ffb_6b45_df6f_3e2c_9590_e0d5_4c76_3b6a, 0x3f89_28ff_3d0c_43a4_6c1d_13b4_79a7_bd3e),
    (0x3ffb_7691_40a2_526f_c94e_cf23_d470_f8c2, 0x3f86_f017_a7f6_e08b_6413_b02d_a647_cd30),
    (0x3ffb_81ca_63d0_5a44_9827_184d_3fd5_f19b, 0xbf86_1e23_c4b5_1da2_e2ab_a373_78dc_0b6d),
    (0x3ffb_8cf1_8388_6480_c9b2_8b1f_97de_ec52, 0x3f89_72f1_7f0d_b606_9144_c46c_1c96_517b),
    (0x3ffb_9806_d941_4a20_9720_7328_f766_dece, 0xbf88_89a3_0a95_f846_c186_5552_964c_c75b),
    (0x3ffb_a30a_9d60_9efe_9c28_1982_d7df_7ae7, 0xbf89_b698_aac9_e0ec_0188_6140_0af9_fde0),
    (0x3ffb_adfd_0741_6be0_6fd7_6ea6_9ee7_686c, 0x3f89_5eec_d299_1bc4_15de_0639_fdb5_9eb5),
    (0x3ffb_b8de_4d3a_b3d9_7f5d_c97f_a3eb_295e, 0xbf89_e1dc_30b2_4f48_ad15_04d3_9cea_5e93),
    (0x3ffb_c3ae_a4a5_c6ef_e9d1_b9bf_7b46_9163, 0x3f89_14ae_ca9c_ea45_c47f_b092_e364_2c9a),
    (0x3ffb_ce6e_41e4_63da_4f48_7cfe_37b2_f3fa, 0x3f87_a5c5_2e21_f433_9b36_4978_94b2_b3e5),
    (0x3ffb_d91d_5866_aa99_b8c5_ecd8_5447_2183, 0xbf89_35b1_ee9d_1f61_367c_5544_2063_f157),
    (0x3ffb_e3bc_1ab0_e19f_e3d5_62a5_3f07_58d8, 0x3f89_d34d_e402_146e_5fb4_25db_e43d_6ff9),
    (0x3ffb_ee4a_ba61_0f20_4710_9cc0_2084_996a, 0x3f89_2dc7_d61d_407d_4626_6f88_23cd_ce76),
    (0x3ffb_f8c9_6834_6819_084e_0349_4e7d_691d, 0xbf89_c2da_eb93_5191_4911_85fb_08eb_cb35),
    (0x3ffc_019c_2a06_4b48_6717_a766_8387_f628, 0x3f89_a4c9_ecc9_2d13_3e34_fd34_6830_4a9d),
    (0x3ffc_06cb_d67a_6c3b_6545_8c50_fd80_1841, 0xbf89_4301_ad2f_9cb6_1b56_81f9_dea2_fed0),
    (0x3ffc_0bf3_d093_7c41_c3c2_f40d_06db_6c67, 0xbf89_0c1f_ad05_0c06_15a0_f108_7fe7_c3bc),
    (0x3ffc_1114_2f08_1135_6e47_3b0e_4f76_b64f, 0x3f8a_3bf3_260f_f0d2_d8f0_ce3e_862b_3cdc),
    (0x3ffc_162d_082a_c9d0_f8e7_1a2f_290e_9269, 0xbf8a_7855_af01_89ce_dd3f_b6ca_42df_3002),
    (0x3ffc_1b3e_71ec_94f7_abbb_b332_4a0f_fa25, 0xbf89_d91a_1eeb_4731_8f43_c6f0_908c_b2fe),
    (0x3ffc_2048_81de_e877_7552_c136_a75f_db30, 0x3f89_1a22_4d17_4a7c_86c2_ea9c_f544_4575),
    (0x3ffc_254b_4d35_e7d3_c1d7_958f_fee7_2abf, 0xbf88_f521_9e73_a565_26e7_1218_8116_9895),
    (0x3ffc_2a46_e8ca_7ba2_9955_cdd7_838e_8147, 0xbf8a_a22f_0379_e668_7e78_f8df_1c52_c4b9),
    (0x3ffc_2f3b_691c_5a00_0be3_4bf0_81e7_54e3, 0xbf89_685a_d657_3a6f_6f7f_6c33_e8e6_ad75),
    (0x3ffc_3428_e254_0096_d3b6_33e0_4615_f162, 0x3f8a_7891_7616_f532_6588_95df_d41a_9700),
    (0x3ffc_390f_6844_a0b8_3029_d552_4ca8_e36a, 0xbf86_4140_31e6_98bf_e6b4_5080_38e9_4a9f),
    (0x3ffc_3def_0e6d_fdf8_4ea1_0095_aeaa_8224, 0xbf84_913f_ed4a_930d_c964_e19d_63dd_71f3),
    (0x3ffc_42c7_e7fe_3fc0_1c5b_aa84_ea83_c951, 0xbf8a_7721_9496_3e3c_41dd_1a1e_461d_b05a),
    (0x3ffc_479a_07d3_b641_142c_a3a5_b050_d3d8, 0x3f86_8cf3_96a9_6c3d_a906_2246_4019_78a7),
    (0x3ffc_4c65_807e_9333_8219_62bd_3976_a482, 0xbf89_8d31_5e35_eedc_ed7e_245c_3b14_b13f),
    (0x3ffc_512a_6442_96c3_cb09_6f47_255f_388a, 0xbf89_0ee6_898c_4ec9_699a_1157_b60e_cfae),
    (0x3ffc_55e8_c518_b10f_859b_f037_5046_9138, 0x3f8a_8777_78e0_42ca_1fff_8c09_b49a_738f),
    (0x3ffc_5aa0_b4b0_988f_98f4_b7b3_557b_8b26, 0xbf89_07fe_7162_dc07_a110_0ac4_213f_8ef7),
    (0x3ffc_5f52_4472_55c9_24e6_e695_997f_8d98, 0xbf8a_067c_1f62_1638_17e1_06df_bade_327c),
    (0x3ffc_63fd_857f_c49b_aa7c_0cd1_066d_4bef, 0x3f8a_2928_70bc_94e8_ccf4_111f_7c0f_4858),
    (0x3ffc_68a2_88b6_0b7f_c2b6_2243_0e54_0656, 0xbf87_588e_ff7d_af9b_0d0b_8edd_735e_3432),
    (0x3ffc_6d41_5eaf_0906_a9ea_9d13_2f18_e3f5, 0xbf8a_2f5f_2dcb_25f0_ecb9_9406_1c1c_c617),
    (0x3ffc_71da_17c2_b7e7_fea4_e079_fe7f_ae04, 0x3f8a_584d_dffe_a64a_2093_fabd_7ab6_c5e9),
    (0x3ffc_766c_c408_89e8_4a22_6ff0_2f0c_8be1, 0xbf8a_b1e8_604b_10fa_e605_0e0f_ea20_a361),
    (0x3ffc_7af9_7358_b9e0_3ccb_5c44_890f_7a1f, 0xbf89_7e17_e296_e6ad_3fd3_83a8_3208_211e),
    (0x3ffc_7f80_354d_9529_f92f_3616_977d_c73d, 0x3f8a_a3b0_9b68_013d_8fec_f932_9c75_8c47),
    (0x3ffc_8401_1944_bcb7_52c5_b993_0007_d8de, 0x3f8a_a5cc_c5d7_e42c_37fc_0437_b4fb_2709),
    (0x3ffc_887c_2e60_5e11_89c6_03f2_5d8e_c5d4, 0x3f89_0af9_161b_5e86_245f_5153_57cb_c552),
    (0x3ffc_8cf1_8388_6480_c9b2_8b1f_97de_ec52, 0x3f8a_72f1_7f0d_b606_9144_c46c_1c96_517b),
    (0x3ffc_9161_276b_a297_83a4_f607_cb7e_fbfd, 0x3f88_fa80_0330_06fb_b404_a6e1_7f8c_c755),
    (0x3ffc_95cb_2880_f45b_a6ea_db35_4850_39bb, 0x3f89_e9ad_6d4f_6c05_d3a3_3d86_f1a7_d261),
    (0x3ffc_9a2f_9508_5a45_b927_e600_3902_8402, 0xbf88_b2fe_f4f2_32eb_db4c_1a0e_13de_2ebe),
    (0x3ffc_9e8e_7b0c_0d4b_e203_de57_e9a3_44bb, 0x3f87_d03f_55fe_3205_899b_4785_f699_590e),
    (0x3ffc_a2e7_e861_8c2d_2488_2a4f_9de5_0ad8, 0xbf87_bbaa_c692_6508_6f41_019e_0150_345f),
    (0x3ffc_a73b_eaaa_a22f_38e0_4a37_a21c_b7f7, 0xbf8a_ff12_d6b3_e98a_ec55_86eb_3ed4_04fb),
    (0x3ffc_ab8a_8f56_677f_c365_b0e5_a07b_a80a, 0x3f8a_1b38_40b7_4988_bdc0_cd91_b723_d02e),
    (0x3ffc_afd3_e3a2_3b68_00f5_4642_bb79_3d54, 0xbf8a_28cc_d50f_29b6_8fe6_c9d1_a419_132d),
    (0x3ffc_b417_f49a_b880_6bc9_5438_17a0_1193, 0x3f8a_537e_11a1_6b2b_d7da_b371_ee90_4b48),
    (0x3ffc_b856_cf1c_a310_56c3_f6e2_6b73_2295, 0x3f8a_a31f_b187_e53a_787c_7524_0069_e0ba),
    (0x3ffc_bc90_7fd5_d1c4_0693_39ff_22e1_55d4, 0xbf8a_eda7_0459_d40f_3e1c_b3ee_ffa2_8005),
    (0x3ffc_c0c5_1346_10e2_67bf_a808_f847_206a, 0xbf89_9e9b_e311_1f25_1ed4_2785_c676_0f8a),
    (0x3ffc_c4f4_95c0_002a_25ee_9a87_0fd4_7790, 0x3f8a_f6dd_af5a_e1b6_bccc_ff03_7f29_4449),
    (0x3ffc_c91f_1369_eb7c_9ad8_af7d_b3a3_a2a7, 0x3f8a_b56a_841f_ae03_3ea9_e34c_a2e7_40d4),
    (0x3ffc_cd44_983e_9e7b_ca1e_d1e0_c96f_8e6a, 0x3f86_7f7e_8ef0_ca83_af72_1391_ef9a_9558),
    (0x3ffc_d165_300e_333f_69c0_28a3_c44b_e510, 0xbf8a_98b8_0aa2_2e2e_6203_8a2b_b12a_45fe),
    (0x3ffc_d580_e67e_dc43_ccfa_0daf_2302_7234, 0x3f8a_90b4_6d98_8b03_b97d_190f_d752_ded5),
    (0x3ffc_d997_c70d_a9b4_6857_c60d_08e3_f5f5, 0xbf8a_68e3_9f98_2377_e509_6c89_ffd2_a031),
    (0x3ffc_dda9_dd0f_4a32_9136_847d_d694_46a0, 0x3f89_96e1_9d82_8881_a0f2_1976_d427_6023),
    (0x3ffc_e1b7_33b0_c738_1094_f8c2_15ff_704e, 0xbf87_98a2_7f76_44ab_f7fc_0a11_cfd9_860b),
    (0x3ffc_e5bf_d5f8_3d34_2043_0257_96c8_7bb9, 0xbf89_8766_14bf_5b04_fa23_de0a_6db4_430a),
    (0x3ffc_e9c3_cec5_8f80_7209_8058_f2b5_6405, 0xbf89_9776_cc17_f465_9f66_e3da_b16a_af73),
    (0x3ffc_edc3_28d3_184a_f1cb_a1b7_464d_aee9, 0x3f8a_4b73_5c87_0af4_6e6a_fa28_3f10_f430),
    (0x3ffc_f1bd_eeb6_5490_0d96_cd34_f7df_d409, 0xbf8a_d3c4_c33c_3381_3165_469d_b98e_8f12),
    (0x3ffc_f5b4_2ae0_8c40_70bc_9180_4dd6_cb0c, 0x3f84_52d5_16cf_72e4_38ab_0706_75f4_80c5),
    (0x3ffc_f9a5_e79f_76ac_4917_48bb_6401_46fc, 0x3f87_09f9_6e6b_0a3b_aa23_d356_df4d_18b0),
    (0x3ffc_fd93_2f1d_db4d_5f2e_278b_32c7_0401, 0xbf89_18e9_68bf_559a_b578_9f83_35ff_6884),
    (0x3ffd_00be_05b2_1784_4161_e1a4_6df2_0ee2, 0x3f8b_0a7c_a093_ac68_9eed_9287_4435_6f20),
    (0x3ffd_02b0_432c_96ff_0694_c1c8_d107_db45, 0x3f8a_9030_b79e_a884_4602_ebbd_b418_c2a4),
    (0x3ffd_04a0_54e1_3900_409a_780a_5b39_9fbd, 0xbf89_7b51_aa1e_c671_f275_6fd0_6fa5_0f38),
    (0x3ffd_068e_3fa2_82e3_ced3_3242_74c9_d348, 0x3f8b_fe8c_f145_b34f_341c_17ba_d4ec_2f3f),
    (0x3ffd_087a_0832_fa7a_c4f9_ab78_53e9_6ef6, 0xbf8a_8178_8f2d_4ce5_884e_8b4d_2582_0a32),
    (0x3ffd_0a63_b345_6c81_8f3d_db75_7ccb_7796, 0xbf8a_ea14_1124_33df_2231_d759_bf00_f9a7),
    (0x3ffd_0c4b_457d_3193_d3ff_a651_b8b8_8e07, 0xbf8b_4b39_7fe0_d0f8_c824_7110_d36b_c952),
    (0x3ffd_0e30_c36e_71a7_f53a_9ae3_8e1b_03b1, 0xbf8a_bf0f_c798_e232_975e_11c0_3d1a_63b4),
    (0x3ffd_1014_319e_661b_c87f_6e8c_7fde_0166, 0x3f8a_cfa5_714e_6785_e222_1bc2_cef4_dbac),
    (0x3ffd_11f5_9483_9a5b_d3ae_c4ea_7c46_415b, 0x3f8b_f9f7_cd47_dc0a_aa4f_e493_95fc_5b26),
    (0x3ffd_13d4_f086_2b2e_1672_44a4_e997_8937, 0xbf8a_6eaa_f88c_b74d_1e90_6bd1_4c4f_9d6a),
    (0x3ffd_15b2_4a00_04a9_2495_5ace_d3a3_66b5, 0xbf88_e321_27f1_78b4_381d_107f_47d1_effe),
    (0x3ffd_178d_a53d_1ee0_13c7_b3e9_6d21_be40, 0xbf8b_b8cc_9034_6d78_0c7f_87d2_d010_4ee4),
    (0x3ffd_1967_067b_b94b_7fea_a558_f2f1_bf07, 0xbf8b_2851_cf5d_1510_eac0_efac_64ad_4916),
    (0x3ffd_1b3e_71ec_94f7_abbb_b332_4a0f_fa25, 0xbf8a_d91a_1eeb_4731_8f43_c6f0_908c_b2fe),
    (0x3ffd_1d13_ebb3_2d7f_8865_1782_3d21_e1e5, 0xbf8b_832f_1aaa_5334_b132_d13d_d9f4_62bb),
    (0x3ffd_1ee7_77e5_f0dc_3526_8e3c_0383_54e0, 0x3f8a_3c4f_4b0d_97fb_679b_12ed_dec3_432a),
    (0x3ffd_20b9_1a8e_7610_50d2_50ea_2a7f_7824, 0xbf84_64cc_7126_14d5_d1d7_e782_ae39_f44f),
    (0x3ffd_2288_d7a9_b2b6_4132_8381_7024_cd82, 0x3f8b_7200_03db_9134_23ea_05dd_418f_8518),
    (0x3ffd_2456_b328_2f78_6081_73a4_4484_aa61, 0x3f8a_173e_4c07_e50e_0f95_cd18_92bd_919a),
    (0x3ffd_2622_b0ee_3b79_cee2_bf4f_c8e9_660f, 0x3f88_efee_6e9f_2b64_a006_5118_db21_814a),
    (0x3ffd_27ec_d4d4_1eb6_752d_3061_1516_c02a, 0xbf8b_fb2c_9d15_bbb6_771d_5456_4dea_b805),
    (0x3ffd_29b5_22a6_4b60_9745_e857_b1e7_313e, 0xbf8a_d395_c16b_6ef6_2618_d95d_d51e_85c7),
    (0x3ffd_2b7b_9e25_8e42_26bf_0485_faaf_a799, 0xbf89_db1f_1f14_182e_f604_418e_f81b_106d),
    (0x3ffd_2d40_4b07_3e27_da50_69ca_d6eb_d961, 0x3f89_7d2a_2422_a887_9c71_4224_8765_e2ed),
    (0x3ffd_2f03_2cf5_6a5b_e40b_aedb_9a49_e1bb, 0xbf8b_31d7_5205_f0ea_84bf_7ecb_4732_04ec),
    (0x3ffd_30c4_478f_0835_f6cf_717b_f672_d778, 0xbf8b_5f3b_f5c3_fda4_7768_5863_cdae_7bda),
    (0x3ffd_3283_9e68_1fc6_236e_91f3_dac9_5d72, 0x3f89_e701_548d_4287_f3ab_964d_9a3c_a7bf),
    (0x3ffd_3441_3509_f79f_ef31_1f12_b358_16f9, 0x3f8a_1782_6ad3_0c54_3d1f_3498_a5e6_f26b),
];
